//! `lf export` specs
//!
//! Export writes a standalone copy of the gathered log and prints its path.

use crate::prelude::*;
use std::path::PathBuf;

fn exported_path(stdout: &str) -> PathBuf {
    PathBuf::from(stdout.trim_end())
}

#[test]
fn export_copies_gathered_log() {
    let log = LogDir::new();
    log.lf()
        .args(&["--max-size", "11", "write", "0123456789", "tail"])
        .passes();

    let path = exported_path(&log.lf().args(&["export"]).passes().stdout());
    let copy = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(copy, "0123456789\ntail\n");
}

#[test]
fn export_paths_are_unique() {
    let log = LogDir::new();
    log.lf().args(&["write", "x"]).passes();

    let first = exported_path(&log.lf().args(&["export"]).passes().stdout());
    let second = exported_path(&log.lf().args(&["export"]).passes().stdout());
    let _ = std::fs::remove_file(&first);
    let _ = std::fs::remove_file(&second);

    assert_ne!(first, second);
    let name = first.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("logfile-"), "got: {}", name);
    assert!(name.ends_with(".txt"), "got: {}", name);
}

#[test]
fn export_json_reports_path() {
    let log = LogDir::new();
    let stdout = log.lf().args(&["-o", "json", "export"]).passes().stdout();

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let path = PathBuf::from(value["path"].as_str().unwrap());
    let exists = path.exists();
    let _ = std::fs::remove_file(&path);

    assert!(exists);
}

#[test]
fn export_does_not_touch_log_files() {
    let log = LogDir::new();
    log.lf().args(&["write", "keep me"]).passes();

    let path = exported_path(&log.lf().args(&["export"]).passes().stdout());
    let _ = std::fs::remove_file(&path);

    assert_eq!(log.read_current(), "keep me\n");
    assert_eq!(log.file_count(), 1);
}
