//! The `subscriber` module backs `pubsub-subscribe`.
//!
//! A [`SubscriptionHandle`] owns one streaming pull and the token that
//! cancels it; [`PrintHandler`] prints and acknowledges each delivery.

pub mod handle;
pub mod handler;

pub use handle::SubscriptionHandle;
pub use handler::{PrintHandler, received_line};
