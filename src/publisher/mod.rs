//! The `publisher` module drives the publish loop of `pubsub-publish`.
//!
//! One iteration: take a timestamp, generate a payload, hand it to the
//! [`TopicPublisher`](crate::transport::TopicPublisher), print a line. Then
//! either stop (run counter reached the stop count) or sleep and go again.

pub mod runner;

pub use runner::{PublishLoop, PublishOptions, sent_line};
