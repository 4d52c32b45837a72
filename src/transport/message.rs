use chrono::{DateTime, TimeDelta, Utc};

/// A delivery handed to a [`MessageHandler`](super::MessageHandler).
///
/// Only the payload is ours; id and publish time are assigned by the
/// transport and carried along for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub data: Vec<u8>,
    pub message_id: String,
    pub publish_time: Option<DateTime<Utc>>,
}

impl InboundMessage {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            message_id: String::new(),
            publish_time: None,
        }
    }

    /// Payload as UTF-8, `None` if it is not valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }

    /// Time between publication and `now`, when the transport reported a
    /// publish time.
    pub fn delivery_delay(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.publish_time.map(|published| now - published)
    }
}

/// Handler verdict for one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// Processed; the transport may forget it.
    Ack,
    /// Not processed; the transport should redeliver.
    Nack,
}
