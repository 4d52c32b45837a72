use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::transport::{MessageHandler, SubscriptionSource};
use crate::utils::Result;

/// A cancellable streaming pull over one subscription.
///
/// `run_until_cancelled` blocks until the token fires (timeout, interrupt,
/// or an explicit `cancel`) or the stream fails. The token is always
/// cancelled on the way out so the transport releases its connection.
pub struct SubscriptionHandle<S> {
    source: S,
    cancel: CancellationToken,
    timeout: Option<Duration>,
}

impl<S: SubscriptionSource> SubscriptionHandle<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cancel: CancellationToken::new(),
            timeout: None,
        }
    }

    /// Cancel the pull once `timeout` has elapsed. Expiry is not an error.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn subscription_path(&self) -> &str {
        self.source.subscription_path()
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel on Ctrl-C.
    pub fn cancel_on_interrupt(&self) {
        let token = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                res = tokio::signal::ctrl_c() => {
                    match res {
                        Ok(()) => info!("Interrupt received, cancelling streaming pull"),
                        Err(e) => warn!("Cannot listen for interrupt: {}", e),
                    }
                    token.cancel();
                }
                _ = token.cancelled() => {}
            }
        });
    }

    pub async fn run_until_cancelled<H>(&self, handler: H) -> Result<()>
    where
        H: MessageHandler,
    {
        let timer = self.timeout.map(|timeout| {
            let token = self.cancel.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = tokio::time::sleep(timeout) => {
                        info!("No more waiting after {:?}, cancelling streaming pull", timeout);
                        token.cancel();
                    }
                    _ = token.cancelled() => {}
                }
            })
        });

        info!("Listening for messages on {}", self.source.subscription_path());
        let result = self
            .source
            .receive(Arc::new(handler), self.cancel.clone())
            .await;

        self.cancel.cancel();
        if let Some(timer) = timer {
            timer.abort();
        }
        result
    }
}
