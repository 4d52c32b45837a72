use super::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.transport.credentials_file, None);
    assert_eq!(settings.transport.emulator_host, None);
    assert_eq!(settings.transport.pool_size, 4);
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.subscriber.timeout_secs, None);
}

#[test]
#[serial]
fn load_config_without_sources_yields_defaults() {
    temp_env::with_vars_unset(
        [
            "PUBSUB_DEBUG_TRANSPORT__CREDENTIALS_FILE",
            "PUBSUB_DEBUG_TRANSPORT__EMULATOR_HOST",
            "PUBSUB_DEBUG_TRANSPORT__POOL_SIZE",
            "PUBSUB_DEBUG_LOGGING__LEVEL",
            "PUBSUB_DEBUG_SUBSCRIBER__TIMEOUT_SECS",
        ],
        || {
            let cfg = load_config().expect("load_config failed");
            assert_eq!(cfg, Settings::default());
        },
    );
}

#[test]
#[serial]
fn load_config_from_file_overrides_defaults() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("pubsub.toml");
    let toml = r#"
        [transport]
        credentials_file = "/secrets/gcp-key.json"
        pool_size = 2

        [logging]
        level = "debug"

        [subscriber]
        timeout_secs = 30
    "#;
    fs::write(&path, toml).expect("write config file");

    let cfg = load_config_from(&path).expect("load_config_from failed");
    assert_eq!(
        cfg.transport.credentials_file.as_deref(),
        Some("/secrets/gcp-key.json")
    );
    assert_eq!(cfg.transport.emulator_host, None);
    assert_eq!(cfg.transport.pool_size, 2);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.subscriber.timeout_secs, Some(30));
}

#[test]
#[serial]
fn environment_overrides_file() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("pubsub.toml");
    fs::write(&path, "[logging]\nlevel = \"warn\"\n").expect("write config file");

    temp_env::with_vars(
        [
            ("PUBSUB_DEBUG_LOGGING__LEVEL", Some("trace")),
            ("PUBSUB_DEBUG_TRANSPORT__EMULATOR_HOST", Some("localhost:8085")),
            ("PUBSUB_DEBUG_SUBSCRIBER__TIMEOUT_SECS", Some("5")),
        ],
        || {
            let cfg = load_config_from(&path).expect("load_config_from failed");
            assert_eq!(cfg.logging.level, "trace");
            assert_eq!(cfg.transport.emulator_host.as_deref(), Some("localhost:8085"));
            assert_eq!(cfg.subscriber.timeout_secs, Some(5));
        },
    );
}

#[test]
fn missing_explicit_file_is_an_error() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("absent.toml");
    assert!(load_config_from(&path).is_err());
}
