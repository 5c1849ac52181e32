//! Tests for TOML configuration loading.

use statue_swap::StatueSwapConfig;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_full_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "seed = 42\nlog_filter = \"debug\"\nlog_file = \"game.log\"\nshow_codes = true"
    )
    .expect("write config");

    let config = StatueSwapConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert!(*config.show_codes());
}

#[test]
fn test_missing_keys_use_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "seed = 7").expect("write config");

    let config = StatueSwapConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.seed(), Some(7));
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.log_file(), &PathBuf::from("statue_swap.log"));
    assert!(!*config.show_codes());
}

#[test]
fn test_malformed_config_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "seed = \"not a number\"").expect("write config");

    let err = StatueSwapConfig::from_file(file.path()).expect_err("bad seed");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    let err = StatueSwapConfig::load(Some(path.as_path())).expect_err("missing file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides() {
    let config = StatueSwapConfig::default()
        .with_seed(Some(3))
        .with_show_codes(true);
    assert_eq!(*config.seed(), Some(3));
    assert!(*config.show_codes());

    // No override keeps the file value.
    let config = config.with_seed(None).with_show_codes(false);
    assert_eq!(*config.seed(), Some(3));
    assert!(*config.show_codes());
}
