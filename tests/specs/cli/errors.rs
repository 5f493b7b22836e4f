//! CLI error handling specs
//!
//! Verify error messages and exit codes for unusable storage and bad input.

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    cli().args(&["rotate"]).fails().stderr_has("unrecognized subcommand");
}

#[test]
fn non_numeric_max_size_fails() {
    let log = LogDir::new();
    log.lf()
        .args(&["--max-size", "lots", "size"])
        .fails()
        .stderr_has("invalid value");
}

#[test]
fn unusable_directory_is_storage_unavailable() {
    let log = LogDir::new();
    let blocker = log.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    cli()
        .args(&["size"])
        .env("LF_LOG_DIR", &blocker)
        .fails()
        .stderr_has("Error: storage unavailable");
}

#[test]
fn failed_rotation_warns_and_keeps_writing() {
    let log = LogDir::new();
    // A non-empty directory in the archive slot blocks the swap
    std::fs::create_dir(log.archive()).unwrap();
    std::fs::write(log.archive().join("keep"), "x").unwrap();

    log.lf()
        .args(&["--max-size", "5", "write", "oversized record"])
        .passes()
        .stderr_has("log rotation failed");

    similar_asserts::assert_eq!(log.read_current(), "oversized record\n");
}

#[test]
fn successful_commands_are_quiet_on_stderr() {
    let log = LogDir::new();
    log.lf()
        .args(&["--max-size", "5", "write", "rotates cleanly"])
        .passes()
        .stderr_lacks("WARN");
}
