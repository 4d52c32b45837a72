//! The `transport` module is the seam between the tools and the Message
//! Transport (Google Cloud Pub/Sub).
//!
//! Delivery, ordering, retention and redelivery all belong to the managed
//! service. The tools only need three capabilities from it:
//!
//! - [`TopicPublisher`]: hand a payload to a topic, fire-and-forget.
//! - [`SubscriptionSource`]: run a streaming pull until cancelled, passing
//!   every delivery to a [`MessageHandler`].
//! - [`MessageHandler`]: decide `Ack`/`Nack` for one delivery.
//!
//! `gcp` implements the first two on top of `google-cloud-pubsub`.

pub mod gcp;
pub mod message;

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::utils::Result;

pub use message::{Ack, InboundMessage};

/// Publishing side of the Message Transport, bound to one topic.
pub trait TopicPublisher {
    /// Fully qualified topic path, `projects/<p>/topics/<t>`.
    fn topic_path(&self) -> &str;

    /// Queue `payload` for publication. The outcome is not reported back.
    fn publish(&self, payload: Vec<u8>) -> impl Future<Output = ()> + Send;

    /// Flush queued messages and stop background workers.
    fn shutdown(&mut self) -> impl Future<Output = ()> + Send;
}

/// Receiving side of the Message Transport, bound to one subscription.
pub trait SubscriptionSource: Send + Sync {
    /// Fully qualified subscription path, `projects/<p>/subscriptions/<s>`.
    fn subscription_path(&self) -> &str;

    /// Stream messages into `handler` until `cancel` fires or the stream
    /// fails. The handler may be invoked concurrently.
    fn receive<H>(
        &self,
        handler: Arc<H>,
        cancel: CancellationToken,
    ) -> impl Future<Output = Result<()>> + Send
    where
        H: MessageHandler;
}

/// Per-message callback. Must be reentrant: the transport may call it from
/// several workers at once.
pub trait MessageHandler: Send + Sync + 'static {
    fn handle(&self, message: &InboundMessage) -> Ack;
}

impl<F> MessageHandler for F
where
    F: Fn(&InboundMessage) -> Ack + Send + Sync + 'static,
{
    fn handle(&self, message: &InboundMessage) -> Ack {
        self(message)
    }
}

/// `projects/<project>/topics/<topic>`, unless `topic` is already qualified.
pub fn topic_path(project: &str, topic: &str) -> String {
    qualify(project, "topics", topic)
}

/// `projects/<project>/subscriptions/<subscription>`, unless already qualified.
pub fn subscription_path(project: &str, subscription: &str) -> String {
    qualify(project, "subscriptions", subscription)
}

fn qualify(project: &str, collection: &str, name: &str) -> String {
    if name.contains('/') {
        name.to_string()
    } else {
        format!("projects/{project}/{collection}/{name}")
    }
}
