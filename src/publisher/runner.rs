use std::num::NonZeroU64;
use std::time::Duration;

use chrono::Local;
use rand::Rng;
use tracing::{debug, info};

use crate::generator::{PayloadGenerator, format_timestamp};
use crate::transport::TopicPublisher;

/// Loop parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PublishOptions {
    /// Sleep between sends. A lower bound, not a period.
    pub interval: Duration,
    /// Stop after this many sends. `None` runs until the process is killed.
    pub stop_after: Option<NonZeroU64>,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            stop_after: None,
        }
    }
}

/// `[<timestamp>] Sent message to '<topic-path>': <message>`
pub fn sent_line(timestamp: &str, topic_path: &str, message: &str) -> String {
    format!("[{timestamp}] Sent message to '{topic_path}': {message}")
}

/// The publish loop. Owns the run counter, which starts at 1 and only grows.
pub struct PublishLoop<P, R: Rng> {
    publisher: P,
    generator: PayloadGenerator<R>,
    options: PublishOptions,
    counter: u64,
}

impl<P, R> PublishLoop<P, R>
where
    P: TopicPublisher,
    R: Rng,
{
    pub fn new(publisher: P, generator: PayloadGenerator<R>, options: PublishOptions) -> Self {
        Self {
            publisher,
            generator,
            options,
            counter: 1,
        }
    }

    /// Startup description: mode, topic, interval and stop count.
    pub fn summary(&self) -> String {
        let stop = match self.options.stop_after {
            Some(end) => format!("stopping after {end}"),
            None => "until killed".to_string(),
        };
        format!(
            "Publishing {} messages to {} every {:?}, {}",
            self.generator.mode(),
            self.publisher.topic_path(),
            self.options.interval,
            stop
        )
    }

    /// Send one message with the current counter and return the printed line.
    pub async fn send_once(&mut self) -> String {
        let now = Local::now();
        let message = self.generator.generate(self.counter, &now);

        self.publisher.publish(message.clone().into_bytes()).await;

        let line = sent_line(&format_timestamp(&now), self.publisher.topic_path(), &message);
        println!("{line}");
        line
    }

    /// Run until the stop count is reached, then flush the publisher.
    /// Returns the number of messages sent.
    ///
    /// Without a stop count this never returns.
    pub async fn run(&mut self) -> u64 {
        info!("{}", self.summary());

        loop {
            self.send_once().await;

            if self.options.stop_after.is_some_and(|end| end.get() == self.counter) {
                break;
            }
            self.counter += 1;
            if !self.options.interval.is_zero() {
                tokio::time::sleep(self.options.interval).await;
            }
        }

        debug!("Flushing publisher for {}", self.publisher.topic_path());
        self.publisher.shutdown().await;
        info!("Sent {} messages, done", self.counter);
        self.counter
    }
}
