//! Integration tests for the `seldns` binary.
//!
//! Argument parsing, help, completions, and exit codes run without any
//! network; the `apply` round trips run against a `wiremock` server
//! standing in for the DNS hosting API.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `seldns` binary with env isolation.
///
/// Clears every variable the CLI reads and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn seldns_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("seldns");
    cmd.env("HOME", "/tmp/seldns-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/seldns-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SELDNS_PROFILE")
        .env_remove("SELDNS_API_URL")
        .env_remove("SELDNS_OUTPUT")
        .env_remove("SELDNS_TIMEOUT")
        .env_remove("SELECTEL_API_KEY");
    cmd
}

/// `seldns` pointed at a mock server with a token already supplied.
fn seldns_against(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = seldns_cmd();
    cmd.env("SELDNS_API_URL", format!("{}/domains/v1/", server.uri()))
        .env("SELECTEL_API_KEY", "test-token")
        .env("SELDNS_PROFILE", "seldns-cli-test");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn mount_my_com(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/domains/v1/my.com"))
        .and(header("X-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "name": "my.com", "user_id": 1
        })))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = seldns_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    seldns_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Selectel")
            .and(predicate::str::contains("apply"))
            .and(predicate::str::contains("domains"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_apply_help_lists_reconcile_flags() {
    seldns_cmd().args(["apply", "--help"]).assert().success().stdout(
        predicate::str::contains("--solo")
            .and(predicate::str::contains("--dry-run"))
            .and(predicate::str::contains("--from-file")),
    );
}

#[test]
fn test_version_flag() {
    seldns_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seldns"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    seldns_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    seldns_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Argument validation ─────────────────────────────────────────────

#[test]
fn test_unknown_record_type_is_rejected() {
    let output = seldns_cmd()
        .args(["apply", "-d", "my.com", "-r", "x", "-t", "PTR", "--value", "y"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("PTR"));
}

#[test]
fn test_unknown_state_is_rejected() {
    seldns_cmd()
        .args(["apply", "-d", "my.com", "--state", "gone"])
        .assert()
        .code(2);
}

#[test]
fn test_record_requires_value() {
    let output = seldns_cmd()
        .args(["apply", "-d", "my.com", "-r", "test", "-t", "A", "--api-token", "t"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let doc = stdout_json(&output);
    assert_eq!(doc["failed"], json!(true));
    assert!(doc["msg"].as_str().unwrap().contains("--value"));
}

#[test]
fn test_missing_token_exits_with_auth_code() {
    let output = seldns_cmd()
        .args(["--profile", "seldns-cli-test-empty", "domains"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let doc = stdout_json(&output);
    assert_eq!(doc["failed"], json!(true));
    assert!(combined_output(&output).contains("SELECTEL_API_KEY"));
}

// ── Against a mock API ──────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_domains_lists_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/domains/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "my.com"},
            {"id": 8, "name": "other.org"}
        ])))
        .mount(&server)
        .await;

    let output = seldns_against(&server)
        .args(["-o", "plain", "domains"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ok\nmy.com\nother.org\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apply_creates_record() {
    let server = MockServer::start().await;
    mount_my_com(&server).await;
    Mock::given(method("GET"))
        .and(path("/domains/v1/7/records/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/domains/v1/7/records/"))
        .and(body_json(json!({
            "name": "test.my.com", "type": "A", "content": "127.0.0.1", "ttl": 3600
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11, "name": "test.my.com", "type": "A", "content": "127.0.0.1", "ttl": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = seldns_against(&server)
        .args([
            "apply", "-d", "my.com", "-r", "test", "-t", "A", "--value", "127.0.0.1", "--state",
            "present",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let doc = stdout_json(&output);
    assert_eq!(doc["changed"], json!(true));
    assert_eq!(doc["result"]["id"], json!(11));
    assert_eq!(doc["result"]["name"], json!("test.my.com"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dry_run_issues_no_mutation() {
    let server = MockServer::start().await;
    mount_my_com(&server).await;
    Mock::given(method("GET"))
        .and(path("/domains/v1/7/records/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 11, "name": "test.my.com", "type": "A", "content": "127.0.0.1", "ttl": 3600}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let output = seldns_against(&server)
        .args([
            "-o", "json-compact", "apply", "-d", "my.com", "-r", "test", "-t", "a", "--value",
            "127.0.0.1", "--ttl", "600", "--state", "present", "--check",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{\"changed\":true}\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_record_on_missing_domain_exits_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/domains/v1/nope.com"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let output = seldns_against(&server)
        .args([
            "apply", "-d", "nope.com", "-r", "www", "-t", "A", "--value", "10.0.0.1", "--state",
            "present",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    assert_eq!(
        stdout_json(&output),
        json!({"failed": true, "msg": "Domain not exists: nope.com"})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_exits_with_connection_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let output = seldns_against(&server).arg("domains").output().unwrap();

    assert_eq!(output.status.code(), Some(7));
    let doc = stdout_json(&output);
    assert!(
        doc["msg"]
            .as_str()
            .unwrap()
            .starts_with("Unable to contact Selectel")
    );
}
