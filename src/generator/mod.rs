//! The `generator` module produces the synthetic payloads the publisher sends.
//!
//! - `mode`: the mutually exclusive [`GenerationMode`] selector.
//! - `payload`: [`PayloadGenerator`], one string per mode.
//! - `card`: Luhn-valid synthetic credit-card numbers.

pub mod card;
pub mod mode;
pub mod payload;

use chrono::{DateTime, Local};

pub use card::{CardNetwork, CardNumberGenerator};
pub use mode::{GenerationMode, ModeFlags};
pub use payload::PayloadGenerator;

/// Local time as `YYYY-MM-DD HH:MM:SS.ffffff`.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
