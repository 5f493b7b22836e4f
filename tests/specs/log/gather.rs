//! `lf gather` specs
//!
//! Output is the archive followed by the current file, byte for byte.

use crate::prelude::*;

#[test]
fn gather_empty_log_prints_nothing() {
    let log = LogDir::new();
    log.lf().args(&["gather"]).passes().stdout_eq("");
}

#[test]
fn gather_length_is_sum_of_records() {
    let log = LogDir::new();
    let records: Vec<String> = (0..20).map(|i| format!("rec-{:02}", i)).collect();
    let mut args = vec!["write"];
    args.extend(records.iter().map(String::as_str));
    log.lf().args(&args).passes();

    let gathered = log.lf().args(&["gather"]).passes().stdout();
    assert_eq!(gathered.len(), 20 * "rec-00\n".len());
}

#[test]
fn gather_orders_archive_before_current() {
    let log = LogDir::new();
    std::fs::write(log.archive(), "older\n").unwrap();
    log.lf().args(&["write", "newer"]).passes();

    log.lf().args(&["gather"]).passes().stdout_eq("older\nnewer\n");
}
