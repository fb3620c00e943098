//! CLI tests for logredact.
//!
//! These tests run the binary end to end and check what reaches the sink.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str =
    "User logged in with password=secret123, api_key=12345, and email=user@example.com";

/// Get a logredact Command with a clean logging environment.
fn logredact() -> Command {
    let mut cmd = cargo_bin_cmd!("logredact");
    cmd.env_remove("RUST_LOG")
        .env_remove("LR_LOG")
        .env_remove("LR_LOG_FORMAT")
        .env_remove("LR_REDACT_TOKEN")
        .env_remove("LR_REDACT_POLICY");
    cmd
}

#[test]
fn sample_message_is_masked() {
    logredact()
        .args(["--stdout", "--no-timestamp", SAMPLE])
        .assert()
        .success()
        .stdout(
            "level=info msg=\"User logged in with password=[REDACTED] api_key=[REDACTED] and email=[REDACTED]\" target=logredact\n",
        );
}

#[test]
fn logs_go_to_stderr_by_default() {
    logredact()
        .args(["--no-timestamp", "token password=abc here"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("password=[REDACTED] here"));
}

#[test]
fn reads_stdin_lines() {
    logredact()
        .args(["--stdout", "--no-timestamp"])
        .write_stdin("api_key=k1 first\nplain second\n")
        .assert()
        .success()
        .stdout(
            "level=info msg=\"api_key=[REDACTED] first\" target=logredact\n\
             level=info msg=\"plain second\" target=logredact\n",
        );
}

#[test]
fn custom_token() {
    logredact()
        .args(["--stdout", "--no-timestamp", "--token", "***", "mail a@b.io now"])
        .assert()
        .success()
        .stdout(predicate::str::contains("msg=\"mail *** now\""));
}

#[test]
fn no_defaults_passes_through() {
    logredact()
        .args(["--stdout", "--no-timestamp", "--no-defaults", "mail a@b.io now"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a@b.io"));
}

#[test]
fn extra_redactor() {
    logredact()
        .args([
            "--stdout",
            "--no-timestamp",
            "--redactor",
            r"ssn=\d{3}-\d{2}-\d{4}",
            "ssn 123-45-6789 ok",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("msg=\"ssn [REDACTED] ok\""));
}

#[test]
fn invalid_redactor_pattern_exits_2() {
    logredact()
        .args(["--redactor", "bad=(", "hello"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("pattern error in redactor 'bad'"));
}

#[test]
fn malformed_redactor_argument_exits_2() {
    logredact()
        .args(["--redactor", "nothing", "hello"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected NAME=REGEX"));
}

#[test]
fn policy_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.json");
    std::fs::write(
        &path,
        r#"{"replacement_token": "<hidden>", "builtins": ["api_key"]}"#,
    )
    .unwrap();

    logredact()
        .args(["--stdout", "--no-timestamp", "--policy"])
        .arg(&path)
        .arg("api_key=1 password=2")
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key=<hidden> password=2"));
}

#[test]
fn missing_policy_file_fails() {
    logredact()
        .args(["--policy", "/nonexistent/policy.json", "hello"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("io error"));
}

#[test]
fn json_format() {
    let output = logredact()
        .args(["--stdout", "--no-timestamp", "--format", "json", "contact ops@example.com"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["msg"], "contact [REDACTED]");
    assert_eq!(parsed["level"], "info");
    assert_eq!(parsed["target"], "logredact");
}

#[test]
fn level_filter_silences_info() {
    logredact()
        .args(["--stdout", "--level", "warn", "password=x"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_format_rejected() {
    logredact()
        .args(["--format", "xml", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log format"));
}

#[test]
fn cli_level_overrides_rust_log() {
    logredact()
        .env("RUST_LOG", "info")
        .args(["--stdout", "--level", "warn", "password=x"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    logredact()
        .env("RUST_LOG", "warn")
        .args(["--stdout", "--no-timestamp", "--level", "info", "password=x ok"])
        .assert()
        .success()
        .stdout(predicate::str::contains("password=[REDACTED] ok"));
}

#[test]
fn rust_log_applies_without_cli_level() {
    logredact()
        .env("RUST_LOG", "warn")
        .args(["--stdout", "password=x"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn non_ascii_neighbours_are_masked() {
    logredact()
        .args(["--stdout", "--no-timestamp", "メールuser@example.com password=abc\u{a0}def"])
        .assert()
        .success()
        .stdout(predicate::str::contains("メール[REDACTED] password=[REDACTED]"))
        .stdout(predicate::str::contains("user@example.com").not())
        .stdout(predicate::str::contains("def").not());
}
