// Unit tests for ClientConfig persistence and validation

use crate::config::CONFIG_FILE_NAME;
use crate::error::config::ConfigError;
use crate::{CULQI_SECURE_BASE_URL, ClientConfig};

use std::time::Duration;

use tempfile::TempDir;

/// **VALUE**: Verifies a missing config file yields defaults rather than an error.
///
/// **WHY THIS MATTERS**: First run has no `culqi.json`; the client must still reach the
/// production hosts.
#[test]
fn given_empty_dir_when_loading_config_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = ClientConfig::load(dir.path()).unwrap();

    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.secure_base_url, CULQI_SECURE_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

#[test]
fn given_saved_config_when_loaded_then_values_survive() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig {
        timeout_secs: 12,
        user_agent: Some("tienda/1.0".into()),
        ..ClientConfig::with_base_url("http://localhost:8080/v2")
    };

    config.save(dir.path()).unwrap();
    let loaded = ClientConfig::load(dir.path()).unwrap();

    assert_eq!(loaded, config);
    assert!(!dir.path().join(format!("{CONFIG_FILE_NAME}.tmp")).exists());
}

/// **VALUE**: Verifies partial files fill the gaps with defaults.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[serde(default)]` that makes every
/// hand-edited file with one key fail to parse.
#[test]
fn given_partial_json_when_loaded_then_missing_fields_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"timeout_secs": 5}"#).unwrap();

    let config = ClientConfig::load(dir.path()).unwrap();

    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.secure_base_url, CULQI_SECURE_BASE_URL);
}

#[test]
fn given_corrupt_json_when_loaded_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{not json").unwrap();

    let err = ClientConfig::load(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn given_out_of_range_values_when_validated_then_rejected() {
    let cases = [
        ClientConfig {
            version: 0,
            ..ClientConfig::default()
        },
        ClientConfig {
            timeout_secs: 301,
            ..ClientConfig::default()
        },
        ClientConfig {
            api_base_url: "ftp://api.culqi.com".into(),
            ..ClientConfig::default()
        },
        ClientConfig {
            secure_base_url: String::new(),
            ..ClientConfig::default()
        },
        ClientConfig {
            user_agent: Some("   ".into()),
            ..ClientConfig::default()
        },
    ];

    for (i, config) in cases.iter().enumerate() {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "case {i} should fail validation"
        );
    }
}

#[test]
fn given_invalid_config_when_saved_then_nothing_is_written() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig {
        timeout_secs: 0,
        ..ClientConfig::default()
    };

    assert!(config.save(dir.path()).is_err());
    assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
}
