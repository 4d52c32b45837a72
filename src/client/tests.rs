use super::*;
use crate::config::Settings;
use google_cloud_gax::conn::Environment;

fn transport() -> crate::config::TransportSettings {
    Settings::default().transport
}

#[test]
fn defaults_use_application_default_credentials() {
    let factory = ClientFactory::new("my-project", transport());
    assert_eq!(factory.project(), "my-project");
    assert_eq!(
        factory.credential_source(),
        CredentialSource::ApplicationDefault
    );
}

#[test]
fn credentials_file_is_preferred_over_ambient() {
    let mut settings = transport();
    settings.credentials_file = Some("./gcp-key.json".to_string());
    let factory = ClientFactory::new("my-project", settings);
    assert_eq!(
        factory.credential_source(),
        CredentialSource::File("./gcp-key.json".to_string())
    );
}

#[test]
fn emulator_wins_over_credentials_file() {
    let mut settings = transport();
    settings.credentials_file = Some("./gcp-key.json".to_string());
    settings.emulator_host = Some("localhost:8085".to_string());
    let factory = ClientFactory::new("my-project", settings);
    assert_eq!(
        factory.credential_source(),
        CredentialSource::Emulator("localhost:8085".to_string())
    );
}

#[test]
fn base_config_carries_project_and_pool() {
    let mut settings = transport();
    settings.pool_size = 2;
    settings.emulator_host = Some("localhost:8085".to_string());
    let config = ClientFactory::new("my-project", settings).base_config();

    assert_eq!(config.project_id.as_deref(), Some("my-project"));
    assert_eq!(config.pool_size, Some(2));
    match config.environment {
        Environment::Emulator(host) => assert_eq!(host, "localhost:8085"),
        _ => panic!("expected emulator environment"),
    }
}
