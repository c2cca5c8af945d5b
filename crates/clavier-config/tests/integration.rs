//! Integration tests for clavier-config crate.

use clavier_config::{ClavierConfig, ConfigError, ValidationError};
use clavier_synth::MixPolicy;
use std::fs;
use tempfile::TempDir;

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = ClavierConfig {
        sample_rate: 48000,
        duration_secs: 2.5,
        mix_policy: MixPolicy::Normalize,
        preview_samples: 1024,
        output_device: Some("USB".to_string()),
        bits_per_sample: 32,
    };
    config.save(&path).unwrap();

    assert!(path.exists());
    assert_eq!(ClavierConfig::load(&path).unwrap(), config);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ClavierConfig::load_from_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ClavierConfig::default());
}

#[test]
fn missing_file_with_load_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = ClavierConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "duration_secs = 0.25\n").unwrap();

    let config = ClavierConfig::load_from_or_default(&path).unwrap();
    assert_eq!(config.duration_secs, 0.25);
    assert_eq!(config.sample_rate, 44100);
    assert_eq!(config.mix_policy, MixPolicy::Sum);
}

#[test]
fn invalid_file_is_not_silently_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "bits_per_sample = 24\n").unwrap();

    let err = ClavierConfig::load_from_or_default(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::UnsupportedBitDepth(24))
    ));
}

#[test]
fn malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "sample_rate = \n").unwrap();

    assert!(matches!(
        ClavierConfig::load(&path),
        Err(ConfigError::TomlParse(_))
    ));
}
