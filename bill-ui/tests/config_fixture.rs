//! Loads config files from disk, complementing the inline-string tests in
//! config.rs.

use std::path::{Path, PathBuf};

use bill_core::TipPercentage;
use bill_ui::config::{ConfigError, FileConfig, Overrides, Settings};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_path() -> PathBuf {
    fixture("share_the_bill.toml")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let config = FileConfig::load(&fixture_path()).expect("fixture file should load");

    assert_eq!(config.default_tip, Some(15));
    assert_eq!(config.default_people, Some(4));
    assert_eq!(config.log_level.as_deref(), Some("debug"));
    assert_eq!(config.log_file, Some(PathBuf::from("share-the-bill.log")));
}

#[test]
fn test_fixture_resolves_with_flag_overrides() {
    let config = FileConfig::load(&fixture_path()).unwrap();
    let overrides = Overrides {
        people: Some(3),
        bill: Some("90".to_string()),
        ..Default::default()
    };

    let settings = Settings::resolve(config, overrides).unwrap();

    assert_eq!(settings.input.tip_percentage, TipPercentage::Fifteen);
    assert_eq!(settings.input.people_count.get(), 3);
    assert_eq!(settings.input.bill_amount_text, "90");
}

#[test]
fn test_load_nonexistent_file_returns_read_error() {
    let result = FileConfig::load(Path::new("/this/path/does/not/exist.toml"));

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_load_invalid_toml_returns_parse_error() {
    let result = FileConfig::load(&fixture("invalid.toml"));

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
