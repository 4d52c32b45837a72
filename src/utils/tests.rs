use super::error::Error;
use super::logging;

#[test]
fn logging_init_accepts_levels() {
    // Should not panic
    logging::init("info");
    logging::init("debug");
    logging::init("WARNING");
    logging::init("nonsense");
}

#[test]
fn invalid_argument_display() {
    let err = Error::InvalidArgument("--interval must be >= 0".to_string());
    assert_eq!(err.to_string(), "Invalid argument: --interval must be >= 0");
}

#[test]
fn config_error_converts() {
    let err: Error = config::ConfigError::NotFound("transport".to_string()).into();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().starts_with("Configuration error"));
}
