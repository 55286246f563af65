//! End-to-end dispatch through parsed arguments.

#![allow(clippy::unwrap_used)]

use clap::Parser;
use respec_cli::{Cli, handlers};

#[test]
fn test_parse_and_run_get() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("respec.toml");
    std::fs::write(&path, "subjectPrefix = \"[element-capture]\"\n").unwrap();

    let cli = Cli::try_parse_from([
        "respec",
        "get",
        path.to_str().unwrap(),
        "subjectPrefix",
    ])
    .unwrap();
    let mut buf = Vec::new();
    assert!(handlers::run(cli.command, cli.settings.as_deref(), &mut buf).unwrap());
    assert_eq!(String::from_utf8(buf).unwrap(), "[element-capture]\n");
}

#[test]
fn test_parse_and_run_validate_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("respec.js");
    std::fs::write(
        &path,
        "var respecConfig = { specStatus: 'CG-DRAFT', editors: [{ name: 'Elad Alon' }], xref: ['html'] };",
    )
    .unwrap();
    let settings = dir.path().join("settings.toml");
    std::fs::write(&settings, "").unwrap();

    let cli = Cli::try_parse_from([
        "respec",
        "--settings",
        settings.to_str().unwrap(),
        "validate",
        "--format",
        "json",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let mut buf = Vec::new();
    assert!(handlers::run(cli.command, cli.settings.as_deref(), &mut buf).unwrap());
    let report: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(report[0]["valid"], true);
}
