//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn lf_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn lf_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("write")
        .stdout_has("size")
        .stdout_has("gather")
        .stdout_has("export")
        .stdout_has("clear")
        .stdout_has("status");
}

#[test]
fn lf_write_help_shows_usage() {
    cli().args(&["write", "--help"]).passes().stdout_has("Usage:");
}

#[test]
fn lf_help_mentions_global_flags() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--dir")
        .stdout_has("--max-size")
        .stdout_has("--timestamp");
}

#[test]
fn lf_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
