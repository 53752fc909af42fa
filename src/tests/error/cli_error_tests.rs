//! Tests for CliError exit codes.

use crate::error::{
    CliError, ConfigError, EXIT_GENERATE_FAILED, EXIT_MISSING_ARGUMENT, GenerateError, Stage,
};

#[test]
fn missing_argument_exits_one_silently() {
    let err = CliError::MissingArgument;
    assert_eq!(err.exit_code(), EXIT_MISSING_ARGUMENT);
    assert_eq!(EXIT_MISSING_ARGUMENT, 1);
    assert!(err.is_silent());
}

#[test]
fn generate_failure_exits_two() {
    let err: CliError = GenerateError::new(Stage::Flush, "x", "disk full").into();
    assert_eq!(err.exit_code(), EXIT_GENERATE_FAILED);
    assert!(!err.is_silent());
    assert_eq!(err.to_string(), "[Flush] x: disk full");
}

#[test]
fn config_failure_exits_two() {
    let err: CliError = ConfigError::UnknownPolicy("sometimes".into()).into();
    assert_eq!(err.exit_code(), EXIT_GENERATE_FAILED);
    assert!(err.to_string().contains("sometimes"));
}
