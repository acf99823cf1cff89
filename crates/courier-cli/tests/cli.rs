//! CLI binary integration tests.
//!
//! These tests exercise the compiled `courier` binary to verify that command
//! routing, dispatch output, and error exit codes work as expected.

use std::process::{Command, Output};
use tempfile::TempDir;

/// Run `courier` against a config path that does not exist, so defaults apply.
fn courier(args: &[&str]) -> (Output, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("courier.json5");
    let output = Command::new(env!("CARGO_BIN_EXE_courier"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run courier");
    (output, dir)
}

#[test]
fn test_cli_version() {
    let (output, _dir) = courier(&["version"]);
    assert!(output.status.success(), "version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("courier"),
        "version output should contain 'courier', got: {}",
        stdout
    );
}

#[test]
fn test_cli_help() {
    let (output, _dir) = courier(&["--help"]);
    assert!(output.status.success(), "--help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("send"), "help should mention 'send', got: {}", stdout);
    assert!(stdout.contains("demo"), "help should mention 'demo', got: {}", stdout);
}

#[test]
fn test_cli_unknown_command() {
    let (output, _dir) = courier(&["nonexistent-command"]);
    assert!(!output.status.success());
}

#[test]
fn test_send_large_video_json() {
    let payload = "x".repeat(1200);
    let (output, _dir) = courier(&["send", "telegram", "video", "@client_tg", &payload, "--json"]);
    assert!(
        output.status.success(),
        "send should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let outcome: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(outcome["channel"], "Telegram");
    assert_eq!(outcome["format"], "video");
    assert_eq!(outcome["warnings"][0]["kind"], "large_video");
    assert!(outcome["status"].get("sent").is_some());
}

#[test]
fn test_send_text_human_output() {
    let (output, _dir) = courier(&["send", "FACEBOOK", "text", "user_id", "hello"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Facebook Messenger"), "got: {}", stdout);
    assert!(stdout.contains("Published to Messenger"), "got: {}", stdout);
}

#[test]
fn test_send_unsupported_channel_fails() {
    let (output, _dir) = courier(&["send", "myspace", "text", "x", "hi"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("myspace"), "got: {}", stderr);
}

#[test]
fn test_demo() {
    let (output, _dir) = courier(&["demo", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("JSON line"))
        .collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4]["channel"], "Instagram Direct");
    assert_eq!(lines[4]["format"], "file");
}

#[test]
fn test_channels_lists_builtins() {
    let (output, _dir) = courier(&["channels"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in ["whatsapp", "telegram", "facebook", "instagram"] {
        assert!(stdout.contains(key), "missing {} in: {}", key, stdout);
    }
}

#[test]
fn test_config_init_and_validate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courier.json5");
    let run = |args: &[&str]| {
        Command::new(env!("CARGO_BIN_EXE_courier"))
            .arg("--config")
            .arg(&path)
            .args(args)
            .output()
            .expect("failed to run courier")
    };

    assert!(run(&["config", "init"]).status.success());
    assert!(path.exists());
    assert!(run(&["config", "validate"]).status.success());
    assert!(!run(&["config", "init"]).status.success());
}

/// Run `courier` against a config file holding `contents`.
fn courier_with_config(contents: &str, args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("courier.json5");
    std::fs::write(&path, contents).unwrap();
    Command::new(env!("CARGO_BIN_EXE_courier"))
        .arg("--config")
        .arg(&path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run courier")
}

#[test]
fn test_send_with_malformed_config_fails() {
    let output = courier_with_config(
        r#"{ transport: { kind: "webhook", webhook_url: "https://hooks.example.com/x } }"#,
        &["send", "telegram", "text", "@x", "hi"],
    );
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "nothing should be dispatched");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "got: {}", stderr);
}

#[test]
fn test_send_with_invalid_policy_fails() {
    let output = courier_with_config(
        "{ channels: { telegram: { preview_length: 0 } } }",
        &["send", "telegram", "text", "@x", "hello"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("preview_length"), "got: {}", stderr);
}

#[test]
fn test_demo_and_channels_reject_invalid_config() {
    let config = "{ transport: { timeout_secs: 0 } }";
    assert!(!courier_with_config(config, &["demo"]).status.success());
    assert!(!courier_with_config(config, &["channels"]).status.success());
}
