use crate::error::{CliError, GenerateDiagnostic, GenerateError, Stage};

#[test]
fn diagnostic_from_open_error_has_help() {
    let err = GenerateError::new(Stage::Open, "gen/main.cpp", "not found");
    let diag = GenerateDiagnostic::from(err);

    assert_eq!(diag.message, "[Open] on 'gen/main.cpp'");
    assert!(diag.source.is_some());
    let help = diag.help.unwrap_or_default();
    assert!(help.contains("directory"), "{help}");
}

#[test]
fn diagnostic_from_missing_argument_shows_usage() {
    let diag = GenerateDiagnostic::from(CliError::MissingArgument);
    let help = diag.help.unwrap_or_default();
    assert!(help.starts_with("Usage"), "{help}");
}
