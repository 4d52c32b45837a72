//! The `client` module turns explicit [`Settings`](crate::config::Settings)
//! into a connected Pub/Sub client.
//!
//! Resolution order for credentials:
//! 1. `transport.emulator_host`: emulator, no credentials.
//! 2. `transport.credentials_file`: that service-account file.
//! 3. Application Default Credentials (`GOOGLE_APPLICATION_CREDENTIALS`,
//!    gcloud user credentials, metadata server).

pub mod factory;

pub use factory::{ClientFactory, CredentialSource};

#[cfg(test)]
mod tests;
