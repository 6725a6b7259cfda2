// Unit tests for `config show|init`

use crate::commands::config::{init, show};

use culqi_client::ClientConfig;
use culqi_client::config::CONFIG_FILE_NAME;

use tempfile::TempDir;

#[test]
fn given_empty_dir_when_showing_config_then_prints_defaults() {
    let dir = TempDir::new().unwrap();

    let output = show(dir.path()).unwrap();

    let parsed: ClientConfig = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, ClientConfig::default());
}

/// **VALUE**: Verifies `init` writes a file that `load` accepts.
#[test]
fn given_empty_dir_when_init_then_file_written_and_loadable() {
    let dir = TempDir::new().unwrap();

    init(dir.path(), false).unwrap();

    assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    assert_eq!(
        ClientConfig::load(dir.path()).unwrap(),
        ClientConfig::default()
    );
}

/// **VALUE**: Verifies `init` never silently replaces a hand-edited file.
///
/// **BUG THIS CATCHES**: Would catch a sandbox base URL being reset to production
/// by a stray `culqi config init`.
#[test]
fn given_existing_file_when_init_without_force_then_usage_error() {
    let dir = TempDir::new().unwrap();
    let custom = ClientConfig::with_base_url("http://localhost:9000/v2");
    custom.save(dir.path()).unwrap();

    let err = init(dir.path(), false).unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert_eq!(ClientConfig::load(dir.path()).unwrap(), custom);
}

#[test]
fn given_existing_file_when_init_with_force_then_overwritten() {
    let dir = TempDir::new().unwrap();
    ClientConfig::with_base_url("http://localhost:9000/v2")
        .save(dir.path())
        .unwrap();

    init(dir.path(), true).unwrap();

    assert_eq!(
        ClientConfig::load(dir.path()).unwrap(),
        ClientConfig::default()
    );
}
