//! `lf clear` specs

use crate::prelude::*;

#[test]
fn clear_empties_current_and_archive() {
    let log = LogDir::new();
    log.lf()
        .args(&["--max-size", "11", "write", "0123456789", "tail"])
        .passes();
    assert!(log.archive().exists());

    log.lf().args(&["clear"]).passes().stdout_has("Cleared");

    assert!(!log.archive().exists());
    log.lf().args(&["size"]).passes().stdout_eq("0\n");
    log.lf().args(&["gather"]).passes().stdout_eq("");
}

#[test]
fn clear_on_fresh_log_succeeds() {
    let log = LogDir::new();
    log.lf().args(&["clear"]).passes();
    log.lf().args(&["size"]).passes().stdout_eq("0\n");
}

#[test]
fn writing_after_clear_starts_over() {
    let log = LogDir::new();
    log.lf().args(&["write", "before"]).passes();
    log.lf().args(&["clear"]).passes();
    log.lf().args(&["write", "after"]).passes();

    assert_eq!(log.read_current(), "after\n");
}
