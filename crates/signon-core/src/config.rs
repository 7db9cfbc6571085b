//! Configuration management for signon.
//!
//! Loads configuration from ${SIGNON_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the server hosting the form endpoints.
    pub base_url: String,

    /// Path the login form posts to.
    pub login_path: String,

    /// Path the register form posts to.
    pub register_path: String,

    /// Open the redirect target with the system opener after success.
    pub open_redirect: bool,
}

impl Config {
    /// The original server runs on Flask's default port.
    const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
    const DEFAULT_LOGIN_PATH: &str = "/login";
    const DEFAULT_REGISTER_PATH: &str = "/register";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            login_path: Self::DEFAULT_LOGIN_PATH.to_string(),
            register_path: Self::DEFAULT_REGISTER_PATH.to_string(),
            open_redirect: true,
        }
    }
}

pub mod paths {
    //! Path resolution for signon configuration and data directories.
    //!
    //! SIGNON_HOME resolution order:
    //! 1. SIGNON_HOME environment variable (if set)
    //! 2. ~/.config/signon (default)

    use std::path::PathBuf;

    /// Returns the signon home directory.
    ///
    /// Checks SIGNON_HOME env var first, falls back to ~/.config/signon
    pub fn signon_home() -> PathBuf {
        if let Ok(home) = std::env::var("SIGNON_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("signon"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        signon_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn log_dir() -> PathBuf {
        signon_home().join("logs")
    }
}
