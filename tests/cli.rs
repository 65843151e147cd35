//! Tests for the `paradox` binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs")
        .join("samples")
        .join(name)
}

fn write_temp(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn format_prints_canonical_text() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("format").arg(sample_path("010-integer-sequences.txt"));

    cmd.assert()
        .success()
        .stdout("ids = { 1 2 3 }\nsingle = { 42 }\nwrapped = { 10 20 30 }\n");
}

#[test]
fn format_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_temp(&dir, "in.txt", "a={b=1}\n");
    let output = dir.path().join("out.txt");

    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("format").arg(&input).arg("-o").arg(&output);
    cmd.assert().success().stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "a = {\n  b = 1\n}\n");
}

#[test]
fn format_uses_configured_indent() {
    let dir = TempDir::new().unwrap();
    let input = write_temp(&dir, "in.txt", "a={b=1}\n");
    let config = write_temp(&dir, "paradox.toml", "[render]\nindent = \"    \"\n");

    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("--config").arg(&config).arg("format").arg(&input);
    cmd.assert().success().stdout("a = {\n    b = 1\n}\n");
}

#[test]
fn inspect_defaults_to_treeviz() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("inspect").arg(sample_path("000-flat.txt"));

    cmd.assert()
        .success()
        .stdout("├─ a: 1\n├─ b: hello\n└─ c: yes\n");
}

#[test]
fn inspect_json() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("inspect")
        .arg(sample_path("000-flat.txt"))
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"hello\""));
}

#[test]
fn inspect_rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("inspect")
        .arg(sample_path("000-flat.txt"))
        .arg("-f")
        .arg("xml");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: unknown format 'xml'"));
}

#[test]
fn check_reports_each_file() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("check")
        .arg(sample_path("000-flat.txt"))
        .arg(sample_path("020-nested.txt"));

    cmd.assert().success().stdout(
        predicate::str::contains("000-flat.txt: ok (3 entries)")
            .and(predicate::str::contains("020-nested.txt: ok (3 entries)")),
    );
}

#[test]
fn check_fails_on_parse_error() {
    let dir = TempDir::new().unwrap();
    let broken = write_temp(&dir, "broken.txt", "a = 1\n}\n");

    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("check").arg(sample_path("000-flat.txt")).arg(&broken);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("000-flat.txt: ok"))
        .stderr(
            predicate::str::contains("broken.txt:2:1:")
                .and(predicate::str::contains("1 of 2 file(s) failed to parse")),
        );
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("format").arg(dir.path().join("nope.txt"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: I/O error on"));
}

#[test]
fn time_prints_milliseconds() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.arg("time")
        .arg(sample_path("050-country-history.txt"))
        .arg("-n")
        .arg("3");

    cmd.assert().success().stdout(
        predicate::str::is_match(r"^\d+ ms\n3 runs, \d+\.\d{3} ms per run\n$").unwrap(),
    );
}

#[test]
fn requires_a_subcommand() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.assert().failure();
}

#[test]
fn debug_flag_enables_parse_logging() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.env_remove("RUST_LOG")
        .arg("-dd")
        .arg("check")
        .arg(sample_path("000-flat.txt"));

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("parsing"));
}

#[test]
fn rust_log_selects_log_targets() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.env("RUST_LOG", "paradox_script=debug")
        .arg("check")
        .arg(sample_path("000-flat.txt"));

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("paradox_script::paradox::parsing::parser"));
}

#[test]
fn quiet_by_default() {
    let mut cmd = cargo_bin_cmd!("paradox");
    cmd.env_remove("RUST_LOG")
        .arg("check")
        .arg(sample_path("000-flat.txt"));

    cmd.assert().success().stderr("");
}
