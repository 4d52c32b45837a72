//! # pubsub-debug
//!
//! `pubsub_debug` backs two small debugging tools for Google Cloud Pub/Sub:
//!
//! - `pubsub-publish` sends synthetic test messages to a topic on an
//!   interval, optionally stopping after a fixed count.
//! - `pubsub-subscribe` opens a streaming pull on a subscription and prints
//!   and acknowledges every message it receives.
//!
//! Delivery, ordering, retention and redelivery are left entirely to the
//! managed service.
//!
//! ## Core Modules
//!
//! - `cli`: command-line arguments for both tools.
//! - `config`: explicit settings (credentials, emulator, logging, timeout).
//! - `client`: builds a connected Pub/Sub client from the settings.
//! - `transport`: the traits the tools need from Pub/Sub, and their Google Cloud implementation.
//! - `generator`: synthetic payloads for each generation mode.
//! - `publisher`: the publish loop.
//! - `subscriber`: the cancellable subscription handle and the printing handler.
//! - `utils`: error type and logging.

pub mod cli;
pub mod client;
pub mod config;
pub mod generator;
pub mod publisher;
pub mod subscriber;
pub mod transport;
pub mod utils;
