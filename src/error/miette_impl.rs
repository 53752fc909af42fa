//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{CliError, GenerateError, Stage};

/// A diagnostic wrapper for generation errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct GenerateDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Open => "Check that the parent directory exists and is writable",
        Stage::Write | Stage::Flush => "Check free disk space and the target filesystem",
    }
}

impl From<GenerateError> for GenerateDiagnostic {
    fn from(e: GenerateError) -> Self {
        GenerateDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            help: Some(help_for(e.stage).into()),
            source: Some(e.error),
            severity: Severity::Error,
        }
    }
}

impl From<CliError> for GenerateDiagnostic {
    fn from(e: CliError) -> Self {
        match e {
            CliError::Generate(e) => GenerateDiagnostic::from(e),
            CliError::MissingArgument => GenerateDiagnostic {
                message: CliError::MissingArgument.to_string(),
                source: None,
                help: Some("Usage: srcgen <output-file>".into()),
                severity: Severity::Error,
            },
            other => GenerateDiagnostic {
                message: other.to_string(),
                source: None,
                help: None,
                severity: Severity::Error,
            },
        }
    }
}

impl From<GenerateError> for miette::Report {
    fn from(e: GenerateError) -> Self {
        miette::Report::new(GenerateDiagnostic::from(e))
    }
}
