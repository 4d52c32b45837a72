use google_cloud_gax::conn::Environment;
use google_cloud_pubsub::client::google_cloud_auth::credentials::CredentialsFile;
use google_cloud_pubsub::client::{Client, ClientConfig};
use tracing::info;

use crate::config::TransportSettings;
use crate::utils::Result;

/// Where the client gets its identity from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Emulator(String),
    File(String),
    ApplicationDefault,
}

/// Builds Pub/Sub clients for one project from transport settings.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    project: String,
    settings: TransportSettings,
}

impl ClientFactory {
    pub fn new(project: impl Into<String>, settings: TransportSettings) -> Self {
        Self {
            project: project.into(),
            settings,
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn credential_source(&self) -> CredentialSource {
        if let Some(host) = &self.settings.emulator_host {
            CredentialSource::Emulator(host.clone())
        } else if let Some(path) = &self.settings.credentials_file {
            CredentialSource::File(path.clone())
        } else {
            CredentialSource::ApplicationDefault
        }
    }

    /// Client configuration without credentials attached yet.
    pub fn base_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            project_id: Some(self.project.clone()),
            pool_size: Some(self.settings.pool_size),
            ..Default::default()
        };
        if let CredentialSource::Emulator(host) = self.credential_source() {
            config.environment = Environment::Emulator(host);
        }
        config
    }

    /// Resolve credentials and open the connection pool.
    pub async fn connect(&self) -> Result<Client> {
        let source = self.credential_source();
        let config = self.base_config();

        let config = match &source {
            CredentialSource::Emulator(host) => {
                info!("Using Pub/Sub emulator at {}", host);
                config
            }
            CredentialSource::File(path) => {
                info!("Using credentials file {}", path);
                let credentials = CredentialsFile::new_from_file(path.clone()).await?;
                config.with_credentials(credentials).await?
            }
            CredentialSource::ApplicationDefault => config.with_auth().await?,
        };

        // with_auth may fill in a project from the credentials; ours wins
        let config = ClientConfig {
            project_id: Some(self.project.clone()),
            ..config
        };

        Ok(Client::new(config).await?)
    }
}
