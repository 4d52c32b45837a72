//! The `error` module defines the error type used across `pubsub_debug`.
//!
//! Failures raised by the Pub/Sub client library are wrapped unmodified; the
//! tools never retry or classify them, they only carry them to the process
//! boundary.

use google_cloud_gax::grpc::Status;
use google_cloud_pubsub::client::google_cloud_auth;
use thiserror::Error;

/// Result type for `pubsub_debug` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Settings could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A command-line value was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Credentials could not be resolved.
    #[error("Authentication error: {0}")]
    Auth(#[from] google_cloud_auth::error::Error),

    /// The Pub/Sub client could not be constructed.
    #[error("Connection error: {0}")]
    Connect(#[from] google_cloud_pubsub::client::Error),

    /// The streaming pull ended with a gRPC status.
    #[error("Transport error: {0}")]
    Transport(#[from] Status),
}
