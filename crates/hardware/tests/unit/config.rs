//! Configuration Tests.
//!
//! Checks the defaults, JSON parsing with partial input, and file loading errors.

use cisc16_core::common::SimError;
use cisc16_core::config::{BootConfig, Config, DisplayConfig, GeneralConfig};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.general.trace_writes);
    assert_eq!(config.display.columns, 80);
    assert_eq!(config.display.rows, 30);
    assert_eq!(config.display.cells(), 2400);
    assert_eq!(config.boot.banner, "CISC-16-A OS");
    assert_eq!(config.boot.prompt, "> ");
}

#[test]
fn test_json_empty_object_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_json_partial_sections() {
    let json = r#"{
        "general": { "trace_writes": true },
        "display": { "columns": 40 }
    }"#;
    let config = Config::from_json_str(json).unwrap();
    assert!(config.general.trace_writes);
    assert_eq!(
        config.display,
        DisplayConfig {
            columns: 40,
            rows: 30
        }
    );
    assert_eq!(config.boot, BootConfig::default());
}

#[test]
fn test_json_full() {
    let json = r##"{
        "general": { "trace_writes": false },
        "display": { "columns": 64, "rows": 16 },
        "boot": { "banner": "MINI OS", "prompt": "# " }
    }"##;
    let config = Config::from_json_str(json).unwrap();
    assert_eq!(
        config,
        Config {
            general: GeneralConfig {
                trace_writes: false
            },
            display: DisplayConfig {
                columns: 64,
                rows: 16
            },
            boot: BootConfig {
                banner: "MINI OS".to_string(),
                prompt: "# ".to_string()
            },
        }
    );
}

#[test]
fn test_json_invalid() {
    let err = Config::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)));
    assert!(!err.is_image_error());
}

#[test]
fn test_json_wrong_type() {
    let err = Config::from_json_str(r#"{"display": {"rows": "thirty"}}"#).unwrap_err();
    assert!(matches!(err, SimError::InvalidConfig(_)));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"boot": {"prompt": "$ "}}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.boot.prompt, "$ ");
    assert_eq!(config.boot.banner, "CISC-16-A OS");
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SimError::ConfigUnavailable { .. }));
    assert!(err.to_string().contains("absent.json"));
}
