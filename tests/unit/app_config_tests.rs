/*!
 * Tests for application configuration
 */

use std::path::PathBuf;
use anyhow::Result;
use cardshift::app_config::{Config, LogLevel};

/// Test that the default configuration targets the original page pair
#[test]
fn test_default_config_shouldTargetOriginalPagePair() {
    let config = Config::default();

    assert_eq!(
        config.targets,
        vec![PathBuf::from("dia1.html"), PathBuf::from("dia2.html")]
    );
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default configuration validates
#[test]
fn test_default_config_shouldValidate() -> Result<()> {
    Config::default().validate()
}

/// Test that an empty target list is rejected
#[test]
fn test_validate_withEmptyTargets_shouldFail() {
    let config = Config {
        targets: Vec::new(),
        log_level: LogLevel::Info,
    };

    assert!(config.validate().is_err());
}

/// Test that serialization round-trips through JSON
#[test]
fn test_config_serialization_shouldRoundTrip() -> Result<()> {
    let config = Config {
        targets: vec![PathBuf::from("agenda.html")],
        log_level: LogLevel::Debug,
    };

    let json = serde_json::to_string_pretty(&config)?;
    assert!(json.contains("agenda.html"));
    assert!(json.contains("debug"));

    let parsed: Config = serde_json::from_str(&json)?;
    assert_eq!(parsed.targets, config.targets);
    assert_eq!(parsed.log_level, LogLevel::Debug);

    Ok(())
}

/// Test that missing fields fall back to defaults when deserializing
#[test]
fn test_config_deserialization_withMissingFields_shouldUseDefaults() -> Result<()> {
    let parsed: Config = serde_json::from_str("{}")?;

    assert_eq!(
        parsed.targets,
        vec![PathBuf::from("dia1.html"), PathBuf::from("dia2.html")]
    );
    assert_eq!(parsed.log_level, LogLevel::Info);

    Ok(())
}
