//! Generator configuration.

use std::ffi::OsString;
use std::path::Path;

use serde::Deserialize;

use super::FileExistsPolicy;
use crate::error::ConfigError;

/// Environment variable naming an optional TOML config file for the binary.
pub const CONFIG_ENV_VAR: &str = "SRCGEN_CONFIG";

/// Environment variable overriding `file_exists_policy` ("overwrite" or "error").
pub const POLICY_ENV_VAR: &str = "SRCGEN_FILE_EXISTS_POLICY";

/// Settings for a generator run.
///
/// Every field has a default, so an empty document is a valid config:
///
/// ```toml
/// file_exists_policy = "error"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// What to do when the output file already exists
    pub file_exists_policy: FileExistsPolicy,
}

impl GeneratorConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file exists policy.
    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = policy;
        self
    }

    /// Parse a configuration from TOML text. `origin` names the source in errors.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.message().to_string(),
        })
    }

    #[cfg(not(feature = "toml"))]
    pub fn from_toml_str(_text: &str, _origin: &str) -> Result<Self, ConfigError> {
        Err(ConfigError::NotEnabled)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let origin = path.to_string_lossy();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: origin.to_string(),
            source,
        })?;
        log::debug!("loaded config from {origin}");
        Self::from_toml_str(&text, &origin)
    }

    /// Load the file named by `SRCGEN_CONFIG`, then apply
    /// `SRCGEN_FILE_EXISTS_POLICY` on top. Unset or empty variables are ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(
            std::env::var_os(CONFIG_ENV_VAR),
            std::env::var_os(POLICY_ENV_VAR),
        )
    }

    /// Resolve a configuration from an optional config file path and an
    /// optional policy override. The override wins over the file.
    pub fn from_sources(
        path: Option<OsString>,
        policy: Option<OsString>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) if !path.is_empty() => Self::load(path)?,
            _ => Self::default(),
        };

        if let Some(policy) = policy.filter(|p| !p.is_empty()) {
            config.file_exists_policy = policy.to_string_lossy().parse()?;
            log::debug!(
                "file exists policy overridden to {:?}",
                config.file_exists_policy
            );
        }
        Ok(config)
    }
}
