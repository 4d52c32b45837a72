//! The `config` module loads the explicit settings both tools run with.
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config/default` file, then `PUBSUB_DEBUG_*` environment variables using
//! `__` between nested keys (`PUBSUB_DEBUG_TRANSPORT__EMULATOR_HOST`).

mod settings;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{LoggingSettings, Settings, SubscriberSettings, TransportSettings};

const ENV_PREFIX: &str = "PUBSUB_DEBUG";
const DEFAULT_FILE: &str = "config/default";

/// Loads settings from `config/default` (if present) and the environment,
/// merged over the defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
    build(File::with_name(DEFAULT_FILE).required(false))
}

/// Like [`load_config`] but reads the given file, which must exist.
pub fn load_config_from(path: &Path) -> Result<Settings, ConfigError> {
    build(File::from(path).required(true))
}

fn build<S>(file: S) -> Result<Settings, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(partial.merge_with_defaults())
}

#[cfg(test)]
mod tests;
