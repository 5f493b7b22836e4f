//! Configuration specs
//!
//! Flags override environment variables, which override defaults.

use crate::prelude::*;

#[test]
fn dir_flag_overrides_env() {
    let env_dir = LogDir::new();
    let flag_dir = LogDir::new();

    env_dir
        .lf()
        .args(&["--dir", &flag_dir.path().display().to_string(), "write", "hi"])
        .passes();

    assert_eq!(flag_dir.read_current(), "hi\n");
    assert_eq!(env_dir.read_current(), "");
}

#[test]
fn max_size_from_env() {
    let log = LogDir::new();
    log.lf()
        .env("LF_MAX_LOG_SIZE", "11")
        .args(&["write", "0123456789"])
        .passes();

    assert_eq!(log.read_archive().as_deref(), Some("0123456789\n"));
    assert_eq!(log.read_current(), "");
}

#[test]
fn max_size_flag_overrides_env() {
    let log = LogDir::new();
    log.lf()
        .env("LF_MAX_LOG_SIZE", "11")
        .args(&["--max-size", "1000", "write", "0123456789"])
        .passes();

    assert_eq!(log.read_archive(), None);
    assert_eq!(log.read_current(), "0123456789\n");
}

#[test]
fn unparseable_env_max_size_falls_back_to_default() {
    let log = LogDir::new();
    log.lf()
        .env("LF_MAX_LOG_SIZE", "tiny")
        .args(&["status"])
        .passes()
        .stdout_has("rotate at:  100.0 MiB (104857600 bytes)");
}

#[test]
fn timestamp_from_env() {
    let log = LogDir::new();
    log.lf()
        .env("LF_TIMESTAMP", "1")
        .args(&["write", "stamped"])
        .passes();

    let text = log.read_current();
    assert_eq!(text.chars().nth(10), Some('T'), "got: {}", text);
    assert!(text.ends_with(" stamped\n"), "got: {}", text);
}

#[test]
fn status_reports_settings() {
    let log = LogDir::new();
    let expected = format!(
        "current:    {} (0 B)\narchive:    {} (none)\nrotate at:  1.0 KiB (1024 bytes)\ntimestamps: on\n",
        log.current().display(),
        log.archive().display(),
    );

    log.lf()
        .args(&["--max-size", "1024", "--timestamp", "status"])
        .passes()
        .stdout_eq(&expected);
}
