//! Error types for srcgen.
//!
//! This module provides:
//! - `Stage`: Indicates which step of a generation failed
//! - `GenerateError`: A single generation failure with context
//! - `ConfigError`: Failure to load a `GeneratorConfig`
//! - `CliError`: Everything the command line entry point can report, with exit codes

use std::fmt;

use thiserror::Error;

/// Process exit status on success.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit status when the output path argument is absent.
pub const EXIT_MISSING_ARGUMENT: u8 = 1;
/// Process exit status when the output could not be produced.
pub const EXIT_GENERATE_FAILED: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the output stream
    Open,
    Write,
    Flush,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Write => write!(f, "Write"),
            Stage::Flush => write!(f, "Flush"),
        }
    }
}

#[derive(Debug)]
pub struct GenerateError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the output target (file path, sink id)
    pub target: String,
    /// The underlying error
    pub error: Box<dyn std::error::Error + Send + Sync>,
}

impl GenerateError {
    pub fn new(
        stage: Stage,
        target: impl Into<String>,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            stage,
            target: target.into(),
            error: error.into(),
        }
    }

    /// The `io::ErrorKind` of the cause, if the cause is an I/O error.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        self.error
            .downcast_ref::<std::io::Error>()
            .map(std::io::Error::kind)
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// Errors that can occur while loading a `GeneratorConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file contents did not match the expected shape
    #[error("invalid config '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("unknown file exists policy: {0}")]
    UnknownPolicy(String),

    #[error("config files are not supported; enable the 'toml' feature")]
    NotEnabled,
}

/// Errors reported by the command line entry point.
#[derive(Debug, Error)]
pub enum CliError {
    /// No output path was supplied
    #[error("missing output file argument")]
    MissingArgument,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// The confirmation line could not be written
    #[error("cannot write confirmation: {0}")]
    Report(#[source] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::MissingArgument => EXIT_MISSING_ARGUMENT,
            CliError::Config(_) | CliError::Generate(_) | CliError::Report(_) => {
                EXIT_GENERATE_FAILED
            }
        }
    }

    /// Whether the error should be reported to the user.
    ///
    /// A missing argument exits silently.
    pub fn is_silent(&self) -> bool {
        matches!(self, CliError::MissingArgument)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
