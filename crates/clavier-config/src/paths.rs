//! Platform-specific configuration paths.
//!
//! - Linux: `~/.config/clavier/config.toml`
//! - macOS: `~/Library/Application Support/clavier/config.toml`
//! - Windows: `%APPDATA%\clavier\config.toml`

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "clavier";

/// File name of the user configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user configuration file.
///
/// The file may not exist.
pub fn config_file_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE_NAME)
}

/// Ensure the user configuration directory exists.
///
/// Creates the directory and any parent directories if they don't exist.
pub fn ensure_user_config_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_in_app_dir() {
        let path = config_file_path();
        assert!(path.ends_with("clavier/config.toml"));
        assert_eq!(path.parent(), Some(user_config_dir().as_path()));
    }
}
