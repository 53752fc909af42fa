//! Tests for GenerateError formatting.

use crate::error::{GenerateError, Stage};
use std::error::Error;
use std::io::ErrorKind;

#[test]
fn generate_error_display_includes_stage_and_target() {
    let err = GenerateError::new(
        Stage::Open,
        "out/main.cpp",
        std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
    );

    assert_eq!(err.to_string(), "[Open] out/main.cpp: denied");
    assert_eq!(err.io_kind(), Some(ErrorKind::PermissionDenied));
    assert!(err.source().is_some());
}

#[test]
fn generate_error_io_kind_is_none_for_other_causes() {
    let err = GenerateError::new(Stage::Write, "sink", "boom");
    assert_eq!(err.io_kind(), None);
    assert_eq!(format!("{}", err), "[Write] sink: boom");
}

#[test]
fn stage_display() {
    assert_eq!(Stage::Open.to_string(), "Open");
    assert_eq!(Stage::Write.to_string(), "Write");
    assert_eq!(Stage::Flush.to_string(), "Flush");
}
