//! Output file policies.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Policy for handling an existing output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileExistsPolicy {
    #[default]
    /// Truncate and rewrite existing files
    Overwrite,
    /// Refuse to touch an existing file
    Error,
}

impl FromStr for FileExistsPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Ok(FileExistsPolicy::Overwrite),
            "error" => Ok(FileExistsPolicy::Error),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}
