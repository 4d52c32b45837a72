use chrono::{Local, Utc};
use tracing::{debug, warn};

use crate::generator::format_timestamp;
use crate::transport::{Ack, InboundMessage, MessageHandler};

/// `[<timestamp>] Received message from '<subscription-path>': <payload>`
pub fn received_line(timestamp: &str, subscription_path: &str, payload: &str) -> String {
    format!("[{timestamp}] Received message from '{subscription_path}': {payload}")
}

/// Prints every delivery to stdout and acks it.
///
/// Holds no mutable state, so concurrent calls from the transport's
/// workers need no locking. Payloads that are not UTF-8 are nacked and
/// not printed.
#[derive(Debug, Clone)]
pub struct PrintHandler {
    subscription_path: String,
}

impl PrintHandler {
    pub fn new(subscription_path: impl Into<String>) -> Self {
        Self {
            subscription_path: subscription_path.into(),
        }
    }

    /// The line that would be printed for `message`, if it decodes.
    pub fn render(&self, message: &InboundMessage) -> Option<String> {
        let text = message.text()?;
        Some(received_line(
            &format_timestamp(&Local::now()),
            &self.subscription_path,
            text,
        ))
    }
}

impl MessageHandler for PrintHandler {
    fn handle(&self, message: &InboundMessage) -> Ack {
        match self.render(message) {
            Some(line) => {
                println!("{line}");
                if let Some(delay) = message.delivery_delay(Utc::now()) {
                    debug!(
                        "Message {} delivered {} ms after publish",
                        message.message_id,
                        delay.num_milliseconds()
                    );
                }
                Ack::Ack
            }
            None => {
                warn!(
                    "Message {} from {} is not valid UTF-8 ({} bytes), nacking",
                    message.message_id,
                    self.subscription_path,
                    message.data.len()
                );
                Ack::Nack
            }
        }
    }
}
