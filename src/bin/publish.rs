//! `pubsub-publish`: send synthetic test messages to a Pub/Sub topic.
//!
//! ```text
//! GOOGLE_APPLICATION_CREDENTIALS=./gcp-key.json pubsub-publish \
//!     --project=your-project --topic=your-topic \
//!     --interval=0.1 --incremental-text --incremental-end=100
//! ```

use clap::Parser;
use pubsub_debug::cli::PublishArgs;
use pubsub_debug::client::ClientFactory;
use pubsub_debug::config::{Settings, load_config, load_config_from};
use pubsub_debug::generator::PayloadGenerator;
use pubsub_debug::publisher::PublishLoop;
use pubsub_debug::transport::{gcp::GcpTopicPublisher, topic_path};
use pubsub_debug::utils::{Result, logging};
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = PublishArgs::parse();

    if let Err(e) = run(args).await {
        // settings may have failed before logging was set up
        logging::init("info");
        error!("Publisher failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: PublishArgs) -> Result<()> {
    let settings: Settings = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    logging::init(&settings.logging.level);

    let factory = ClientFactory::new(&args.project, settings.transport);
    let client = factory.connect().await?;
    let publisher = GcpTopicPublisher::new(&client, &topic_path(&args.project, &args.topic));

    let generator = PayloadGenerator::new(args.mode());
    let mut publish_loop = PublishLoop::new(publisher, generator, args.options());
    publish_loop.run().await;

    Ok(())
}
