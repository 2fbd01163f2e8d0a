//! Tests for the plan subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_plan_defaults() {
    match parse(&[
        "subguard", "plan", "ep1.srt", "--seconds", "3", "--from", ".srt", "--to", ".vtt",
    ]) {
        CliCommand::Plan {
            path,
            seconds,
            plusmin,
            from,
            to,
            json,
        } => {
            assert_eq!(path, std::path::Path::new("ep1.srt"));
            assert_eq!(seconds, "3");
            assert_eq!(plusmin, "1");
            assert_eq!(from, ".srt");
            assert_eq!(to, ".vtt");
            assert!(!json);
        }
        _ => panic!("expected Plan"),
    }
}

#[test]
fn cli_parse_plan_negative_and_json() {
    match parse(&[
        "subguard",
        "plan",
        "ep1.vtt",
        "--seconds",
        "1.5",
        "--plusmin",
        "-1",
        "--from",
        "vtt",
        "--to",
        "srt",
        "--json",
    ]) {
        CliCommand::Plan { plusmin, json, .. } => {
            assert_eq!(plusmin, "-1");
            assert!(json);
        }
        _ => panic!("expected Plan with --plusmin -1 --json"),
    }
}

#[test]
fn cli_parse_plan_requires_formats() {
    assert!(Cli::try_parse_from(["subguard", "plan", "ep1.srt", "--seconds", "3"]).is_err());
}
