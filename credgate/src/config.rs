//! Configuration loading. The password comes from the environment only; the
//! optional JSON settings file tunes hashing and never carries a secret.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::crypto::passwords::{HashAlgorithm, HashSettings, MAX_BCRYPT_COST, MIN_BCRYPT_COST};

/// Environment variable holding the login password.
pub const PASSWORD_ENV: &str = "ADMINER_PASSWORD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file unreadable: {0}")]
    Io(String),
    #[error("settings parse failed: {0}")]
    Parse(String),
    #[error("invalid setting: {0}")]
    InvalidValue(String),
}

/// Hashing settings as written in the JSON file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsFile {
    pub algorithm: Option<HashAlgorithm>,
    pub bcrypt_cost: Option<u32>,
}

impl SettingsFile {
    fn apply(&self, settings: &mut HashSettings) -> Result<(), ConfigError> {
        if let Some(algorithm) = self.algorithm {
            settings.algorithm = algorithm;
        }
        if let Some(cost) = self.bcrypt_cost {
            if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
                return Err(ConfigError::InvalidValue(format!(
                    "bcryptCost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {cost}"
                )));
            }
            settings.bcrypt_cost = cost;
        }
        Ok(())
    }
}

/// Reads and validates a JSON settings file.
pub fn load_settings(path: impl AsRef<Path>) -> Result<SettingsFile, ConfigError> {
    let raw_json = fs::read_to_string(&path).map_err(|e| ConfigError::Io(format!("{e}")))?;
    let settings: SettingsFile =
        serde_json::from_str(&raw_json).map_err(|e| ConfigError::Parse(format!("{e}")))?;
    settings.apply(&mut HashSettings::default())?;
    Ok(settings)
}

/// Everything the bootstrapper needs, gathered up front so the bootstrap
/// itself never touches the process environment.
pub struct CredentialConfig {
    /// Overrides the random fallback secret when non-empty.
    pub password: Option<Zeroizing<String>>,
    pub hashing: HashSettings,
}

impl CredentialConfig {
    pub fn new(password: Option<String>) -> Self {
        Self {
            password: password.map(Zeroizing::new),
            hashing: HashSettings::default(),
        }
    }

    /// Reads `ADMINER_PASSWORD` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same policy as `from_env` over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(lookup(PASSWORD_ENV))
    }

    pub fn with_hashing(mut self, hashing: HashSettings) -> Self {
        self.hashing = hashing;
        self
    }

    /// Layers a settings file over the current hashing settings.
    pub fn with_settings(mut self, file: &SettingsFile) -> Result<Self, ConfigError> {
        file.apply(&mut self.hashing)?;
        Ok(self)
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hashing.algorithm = algorithm;
        self
    }

    /// Applies the settings file, then the command-line algorithm, so the
    /// flag wins over the file and the file wins over the defaults.
    pub fn layered(
        self,
        file: Option<&SettingsFile>,
        algorithm: Option<HashAlgorithm>,
    ) -> Result<Self, ConfigError> {
        let config = match file {
            Some(file) => self.with_settings(file)?,
            None => self,
        };
        Ok(match algorithm {
            Some(algorithm) => config.with_algorithm(algorithm),
            None => config,
        })
    }

    /// The configured password, treating the empty string as unset.
    pub fn configured_password(&self) -> Option<&str> {
        self.password
            .as_deref()
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("hashing", &self.hashing)
            .finish()
    }
}
