use serde::Deserialize;

/// Top-level settings shared by both tools.
///
/// Replaces the ambient credential state the Pub/Sub client would otherwise
/// pick up on its own: everything the client factory needs is in here.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub transport: TransportSettings,
    pub logging: LoggingSettings,
    pub subscriber: SubscriberSettings,
}

/// How to reach the Message Transport.
///
/// With neither field set the client falls back to Application Default
/// Credentials (and still honours `PUBSUB_EMULATOR_HOST`).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransportSettings {
    /// Service-account key file.
    pub credentials_file: Option<String>,
    /// `host:port` of a Pub/Sub emulator; no credentials are used.
    pub emulator_host: Option<String>,
    pub pool_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SubscriberSettings {
    /// Cancel the streaming pull after this many seconds. `None` waits forever.
    pub timeout_secs: Option<u64>,
}

/// Partial settings loaded from files or environment.
///
/// Missing values are filled from `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub transport: Option<PartialTransportSettings>,
    pub logging: Option<PartialLoggingSettings>,
    pub subscriber: Option<PartialSubscriberSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialTransportSettings {
    pub credentials_file: Option<String>,
    pub emulator_host: Option<String>,
    pub pool_size: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartialSubscriberSettings {
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transport: TransportSettings {
                credentials_file: None,
                emulator_host: None,
                pool_size: 4,
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
            subscriber: SubscriberSettings { timeout_secs: None },
        }
    }
}

impl PartialSettings {
    /// Fill every unset value from `Settings::default()`.
    pub fn merge_with_defaults(self) -> Settings {
        let default = Settings::default();
        let transport = self.transport;
        let logging = self.logging;
        let subscriber = self.subscriber;

        Settings {
            transport: TransportSettings {
                credentials_file: transport
                    .as_ref()
                    .and_then(|t| t.credentials_file.clone())
                    .or(default.transport.credentials_file),
                emulator_host: transport
                    .as_ref()
                    .and_then(|t| t.emulator_host.clone())
                    .or(default.transport.emulator_host),
                pool_size: transport
                    .as_ref()
                    .and_then(|t| t.pool_size)
                    .unwrap_or(default.transport.pool_size),
            },
            logging: LoggingSettings {
                level: logging
                    .and_then(|l| l.level)
                    .unwrap_or(default.logging.level),
            },
            subscriber: SubscriberSettings {
                timeout_secs: subscriber
                    .and_then(|s| s.timeout_secs)
                    .or(default.subscriber.timeout_secs),
            },
        }
    }
}
