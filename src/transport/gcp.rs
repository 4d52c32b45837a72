//! Google Cloud Pub/Sub implementation of the transport traits.

use std::sync::Arc;

use chrono::DateTime;
use google_cloud_googleapis::pubsub::v1::PubsubMessage;
use google_cloud_pubsub::client::Client;
use google_cloud_pubsub::publisher::Publisher;
use google_cloud_pubsub::subscriber::ReceivedMessage;
use google_cloud_pubsub::subscription::Subscription;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{Ack, InboundMessage, MessageHandler, SubscriptionSource, TopicPublisher};
use crate::utils::Result;

/// Publisher bound to one topic. Batching and delivery run on the client
/// library's background tasks.
pub struct GcpTopicPublisher {
    topic_path: String,
    publisher: Publisher,
}

impl GcpTopicPublisher {
    pub fn new(client: &Client, topic_path: &str) -> Self {
        let topic = client.topic(topic_path);
        Self {
            topic_path: topic.fully_qualified_name().to_string(),
            publisher: topic.new_publisher(None),
        }
    }
}

impl TopicPublisher for GcpTopicPublisher {
    fn topic_path(&self) -> &str {
        &self.topic_path
    }

    async fn publish(&self, payload: Vec<u8>) {
        let message = PubsubMessage {
            data: payload,
            ..Default::default()
        };
        // The awaiter is dropped: the message is still sent, we just never
        // look at the assigned id or a failure.
        let _awaiter = self.publisher.publish(message).await;
    }

    async fn shutdown(&mut self) {
        self.publisher.shutdown().await;
    }
}

/// Streaming-pull source for one subscription.
pub struct GcpSubscription {
    subscription: Subscription,
}

impl GcpSubscription {
    pub fn new(client: &Client, subscription_path: &str) -> Self {
        Self {
            subscription: client.subscription(subscription_path),
        }
    }
}

impl SubscriptionSource for GcpSubscription {
    fn subscription_path(&self) -> &str {
        self.subscription.fully_qualified_name()
    }

    async fn receive<H>(&self, handler: Arc<H>, cancel: CancellationToken) -> Result<()>
    where
        H: MessageHandler,
    {
        self.subscription
            .receive(
                move |message: ReceivedMessage, _cancel| {
                    let handler = handler.clone();
                    async move {
                        let inbound = to_inbound(&message);
                        let outcome = match handler.handle(&inbound) {
                            Ack::Ack => message.ack().await,
                            Ack::Nack => message.nack().await,
                        };
                        if let Err(status) = outcome {
                            warn!("Failed to settle message {}: {}", inbound.message_id, status);
                        }
                    }
                },
                cancel,
                None,
            )
            .await?;
        debug!("Streaming pull closed for {}", self.subscription.fully_qualified_name());
        Ok(())
    }
}

fn to_inbound(message: &ReceivedMessage) -> InboundMessage {
    let publish_time = message
        .message
        .publish_time
        .as_ref()
        .and_then(|ts| DateTime::from_timestamp(ts.seconds, ts.nanos.max(0) as u32));

    InboundMessage {
        data: message.message.data.clone(),
        message_id: message.message.message_id.clone(),
        publish_time,
    }
}
