//! The `config.toml` schema.

use crate::error::ConfigError;
use crate::paths::config_file_path;
use crate::validation::{
    ValidationError, ValidationResult, collect, validate_bits_per_sample, validate_duration,
    validate_sample_rate,
};
use clavier_synth::MixPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User settings for synthesis, analysis and output.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClavierConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Length of each chord in seconds.
    pub duration_secs: f64,
    /// How held notes are combined.
    pub mix_policy: MixPolicy,
    /// Leading samples kept for the waveform plot.
    pub preview_samples: usize,
    /// Output device name or index. The host default is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_device: Option<String>,
    /// Bit depth of rendered WAV files (16 or 32).
    pub bits_per_sample: u16,
}

impl Default for ClavierConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration_secs: 1.0,
            mix_policy: MixPolicy::Sum,
            preview_samples: 2000,
            output_device: None,
            bits_per_sample: 16,
        }
    }
}

impl ClavierConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ClavierConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the user configuration file, or defaults if there is none.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_from_or_default(config_file_path())
    }

    /// Load `path`, or defaults if it does not exist.
    pub fn load_from_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();
        if let Err(e) = validate_sample_rate(self.sample_rate) {
            errors.push(e);
        }
        if let Err(e) = validate_duration(self.duration_secs) {
            errors.push(e);
        }
        if self.preview_samples == 0 {
            errors.push(ValidationError::EmptyPreview);
        }
        if let Err(e) = validate_bits_per_sample(self.bits_per_sample) {
            errors.push(e);
        }
        collect(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClavierConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.duration_secs, 1.0);
        assert_eq!(config.mix_policy, MixPolicy::Sum);
        assert_eq!(config.preview_samples, 2000);
        assert_eq!(config.output_device, None);
        assert_eq!(config.bits_per_sample, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            ClavierConfig::from_toml("").unwrap(),
            ClavierConfig::default()
        );
    }

    #[test]
    fn full_toml() {
        let toml_str = r#"
sample_rate = 48000
duration_secs = 0.5
mix_policy = "normalize"
preview_samples = 512
output_device = "pulse"
bits_per_sample = 32
"#;
        let config = ClavierConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.duration_secs, 0.5);
        assert_eq!(config.mix_policy, MixPolicy::Normalize);
        assert_eq!(config.preview_samples, 512);
        assert_eq!(config.output_device.as_deref(), Some("pulse"));
        assert_eq!(config.bits_per_sample, 32);
    }

    #[test]
    fn unknown_mix_policy_is_parse_error() {
        let err = ClavierConfig::from_toml("mix_policy = \"average\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn unknown_key_is_parse_error() {
        let err = ClavierConfig::from_toml("volume = 3").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn out_of_range_values_are_all_reported() {
        let err = ClavierConfig::from_toml("sample_rate = 100\nduration_secs = 60.0").unwrap_err();
        match err {
            ConfigError::Validation(ValidationError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0], ValidationError::SampleRate(100));
                assert_eq!(errors[1], ValidationError::Duration(60.0));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_preview_rejected() {
        let config = ClavierConfig {
            preview_samples: 0,
            ..ClavierConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyPreview));
    }

    #[test]
    fn to_toml_omits_unset_device() {
        let text = ClavierConfig::default().to_toml().unwrap();
        assert!(text.contains("mix_policy = \"sum\""), "got: {text}");
        assert!(!text.contains("output_device"));
    }
}
