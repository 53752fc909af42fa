//! Tests for loading GeneratorConfig from TOML.

use crate::config::{FileExistsPolicy, GeneratorConfig};
use crate::error::ConfigError;

#[test]
fn empty_document_uses_defaults() {
    let cfg = GeneratorConfig::from_toml_str("", "inline").unwrap();
    assert_eq!(cfg, GeneratorConfig::default());
}

#[test]
fn parses_file_exists_policy() {
    let cfg = GeneratorConfig::from_toml_str(r#"file_exists_policy = "error""#, "inline").unwrap();
    assert_eq!(cfg.file_exists_policy, FileExistsPolicy::Error);
}

#[test]
fn rejects_unknown_fields_and_values() {
    let err = GeneratorConfig::from_toml_str("templates = true", "inline").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "inline"));

    let err =
        GeneratorConfig::from_toml_str(r#"file_exists_policy = "append""#, "inline").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn load_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("srcgen.toml");
    std::fs::write(&path, "file_exists_policy = \"overwrite\"\n").unwrap();

    let cfg = GeneratorConfig::load(&path).unwrap();
    assert_eq!(cfg.file_exists_policy, FileExistsPolicy::Overwrite);
}

#[test]
fn policy_override_wins_over_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("srcgen.toml");
    std::fs::write(&path, "file_exists_policy = \"error\"\n").unwrap();

    let path = Some(path.into_os_string());
    let cfg = GeneratorConfig::from_sources(path, Some("overwrite".into())).unwrap();
    assert_eq!(cfg.file_exists_policy, FileExistsPolicy::Overwrite);
}
