//! `pubsub-subscribe`: print and acknowledge messages from a Pub/Sub
//! subscription until interrupted.
//!
//! ```text
//! GOOGLE_APPLICATION_CREDENTIALS=./gcp-key.json pubsub-subscribe \
//!     --project=your-project --subscription=your-subscription
//! ```

use std::time::Duration;

use clap::Parser;
use pubsub_debug::cli::SubscribeArgs;
use pubsub_debug::client::ClientFactory;
use pubsub_debug::config::{Settings, load_config, load_config_from};
use pubsub_debug::subscriber::{PrintHandler, SubscriptionHandle};
use pubsub_debug::transport::{gcp::GcpSubscription, subscription_path};
use pubsub_debug::utils::{Result, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = SubscribeArgs::parse();

    if let Err(e) = run(args).await {
        // settings may have failed before logging was set up
        logging::init("info");
        error!("Subscriber failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: SubscribeArgs) -> Result<()> {
    let settings: Settings = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    logging::init(&settings.logging.level);

    let factory = ClientFactory::new(&args.project, settings.transport);
    let client = factory.connect().await?;
    let path = subscription_path(&args.project, &args.subscription);
    let subscription = GcpSubscription::new(&client, &path);

    let handle = SubscriptionHandle::new(subscription)
        .with_timeout(settings.subscriber.timeout_secs.map(Duration::from_secs));
    handle.cancel_on_interrupt();

    let handler = PrintHandler::new(handle.subscription_path());
    handle.run_until_cancelled(handler).await?;

    info!("Subscription {} closed", path);
    Ok(())
}
