//! Command-line arguments for `pubsub-publish` and `pubsub-subscribe`.

use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser};

use crate::generator::{GenerationMode, ModeFlags};
use crate::publisher::PublishOptions;

/// Publish synthetic test messages to a Pub/Sub topic.
#[derive(Parser, Debug)]
#[command(name = "pubsub-publish", version, about, long_about = None)]
pub struct PublishArgs {
    /// Google Cloud project name
    #[arg(long)]
    pub project: String,

    /// Pub/Sub topic to publish messages to
    #[arg(long)]
    pub topic: String,

    #[command(flatten)]
    pub modes: ModeArgs,

    /// Run counter value after which to stop; below 1 runs forever
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub incremental_end: i64,

    /// Seconds to wait between messages
    #[arg(long, default_value_t = 1.0, value_parser = parse_interval)]
    pub interval: f64,

    /// Settings file (defaults to config/default.* when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Payload selectors. When several are given the first in this list wins.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ModeArgs {
    /// Each message is a random text string
    #[arg(long)]
    pub random_text: bool,

    /// Each message is a random number in 1..=99
    #[arg(long)]
    pub random_number: bool,

    /// Each message is a random city JSON string
    #[arg(long)]
    pub random_city: bool,

    /// Each message is a random credit card number
    #[arg(long)]
    pub random_credit_card: bool,

    /// Each message is a text string whose length increments
    #[arg(long)]
    pub incremental_text: bool,

    /// Each message is an incrementing number
    #[arg(long)]
    pub incremental_number: bool,
}

impl From<ModeArgs> for ModeFlags {
    fn from(args: ModeArgs) -> Self {
        ModeFlags {
            random_text: args.random_text,
            random_number: args.random_number,
            random_city: args.random_city,
            random_credit_card: args.random_credit_card,
            incremental_text: args.incremental_text,
            incremental_number: args.incremental_number,
        }
    }
}

impl PublishArgs {
    pub fn mode(&self) -> GenerationMode {
        GenerationMode::from_flags(self.modes.into())
    }

    pub fn options(&self) -> PublishOptions {
        PublishOptions {
            interval: Duration::from_secs_f64(self.interval),
            stop_after: u64::try_from(self.incremental_end)
                .ok()
                .and_then(NonZeroU64::new),
        }
    }
}

/// Print and acknowledge messages from a Pub/Sub subscription.
#[derive(Parser, Debug)]
#[command(name = "pubsub-subscribe", version, about, long_about = None)]
pub struct SubscribeArgs {
    /// Google Cloud project name
    #[arg(long)]
    pub project: String,

    /// Pub/Sub subscription to receive messages from
    #[arg(long)]
    pub subscription: String,

    /// Settings file (defaults to config/default.* when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_interval(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|e| format!("not a number: {e}"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("interval must be a non-negative number of seconds, got {s}"));
    }
    if Duration::try_from_secs_f64(secs).is_err() {
        return Err(format!("interval {s} is too large"));
    }
    Ok(secs)
}

#[cfg(test)]
mod tests;
