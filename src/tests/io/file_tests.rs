//! Tests for the file output target.

use crate::{FileOutput, OutputTarget};
use std::fs;
use std::io::{ErrorKind, Write};

#[test]
fn file_output_id_is_the_path() {
    let out = FileOutput::new("build/gen/main.cpp");
    assert_eq!(out.id(), "build/gen/main.cpp");
    assert_eq!(out.path(), std::path::Path::new("build/gen/main.cpp"));
}

#[test]
fn file_output_overwrite_truncates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, b"a much longer previous content").unwrap();

    let out = FileOutput::new(path.clone());
    {
        let mut w = out.open_overwrite().unwrap();
        w.write_all(b"abc").unwrap();
    }
    assert_eq!(fs::read(&path).unwrap(), b"abc".to_vec());
}

#[test]
fn file_output_create_new_refuses_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, b"keep").unwrap();

    let out = FileOutput::new(path.clone());
    let err = out.open_create_new().err().expect("should refuse");
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(fs::read(&path).unwrap(), b"keep".to_vec());
}

#[test]
fn file_output_missing_directory_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    let out = FileOutput::new(path);
    let err = out.open_overwrite().err().expect("should fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
