//! Configuration for the clavier keyboard synthesizer.
//!
//! Settings live in a TOML file under the platform configuration directory
//! (see [`paths`]). Every key is optional:
//!
//! ```toml
//! sample_rate = 44100
//! duration_secs = 1.0
//! mix_policy = "sum"        # or "normalize"
//! preview_samples = 2000
//! output_device = "pulse"
//! bits_per_sample = 16
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use clavier_config::ClavierConfig;
//!
//! let config = ClavierConfig::load_or_default().unwrap();
//! println!("{} Hz, {} s", config.sample_rate, config.duration_secs);
//! ```

mod config;
mod error;

/// Platform-specific configuration paths.
pub mod paths;

/// Range checks for configuration values.
pub mod validation;

pub use config::ClavierConfig;
pub use error::ConfigError;
pub use paths::{CONFIG_FILE_NAME, config_file_path, ensure_user_config_dir, user_config_dir};
pub use validation::{
    MAX_DURATION_SECS, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE, ValidationError, ValidationResult,
    validate_bits_per_sample, validate_duration, validate_sample_rate,
};
