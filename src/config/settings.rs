use crate::domain::ports::CredentialsProvider;
use crate::utils::error::{LinkdockError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";

/// Persisted settings, stored as TOML under the platform config directory.
///
/// Every key defaults to empty, so loading a file written by an older
/// version backfills missing keys without touching existing values; the
/// store re-saves after load to keep the on-disk file complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub access_token: String,
}

impl Settings {
    pub fn default_path() -> Result<PathBuf> {
        let dirs =
            ProjectDirs::from("", "", "linkdock").ok_or_else(|| LinkdockError::ConfigError {
                message: "could not determine a config directory for this platform".to_string(),
            })?;
        Ok(dirs.config_dir().join(CONFIG_FILENAME))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load settings from `path`, seeding the file with defaults on first
    /// use and backfilling any keys a partial file is missing.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("seeding default config at {}", path.display());
            let settings = Self::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings =
            toml::from_str(&content).map_err(|e| LinkdockError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        settings.save_to(path)?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| LinkdockError::ConfigError {
                message: format!("TOML serialization error: {}", e),
            })?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check that every key an API call needs is filled in. Fails naming the
    /// first missing key.
    pub fn require_complete(&self) -> Result<()> {
        validate_non_empty_string("auth.host", &self.auth.host)?;
        validate_non_empty_string("auth.user", &self.auth.user)?;
        validate_non_empty_string("auth.access_token", &self.auth.access_token)?;
        validate_url("auth.host", &self.auth.host)?;
        Ok(())
    }
}

impl CredentialsProvider for Settings {
    fn host(&self) -> &str {
        &self.auth.host
    }

    fn user(&self) -> &str {
        &self.auth.user
    }

    fn access_token(&self) -> &str {
        &self.auth.access_token
    }
}
