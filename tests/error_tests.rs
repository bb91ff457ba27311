//! Error scenario integration tests

use std::net::TcpListener;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with isolated config and runtime directories
fn smart_bookmarker_bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("smart-bookmarker").expect("binary should build");
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("XDG_RUNTIME_DIR", home.path())
        .env("HOME", home.path())
        .env_remove("SMART_BOOKMARKER_ENDPOINT");
    cmd
}

fn unreachable_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/save", port)
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    smart_bookmarker_bin(&home)
        .args(["config", "get", "unknown_key"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown key"))
        .stderr(predicate::str::contains("backend_endpoint"));
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    smart_bookmarker_bin(&home)
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_bool() {
    let home = TempDir::new().unwrap();
    smart_bookmarker_bin(&home)
        .args(["config", "set", "notify", "sometimes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("true"));
}

#[test]
fn config_set_invalid_selection_tool() {
    let home = TempDir::new().unwrap();
    smart_bookmarker_bin(&home)
        .args(["config", "set", "linux.selection_tool", "xclip"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("arboard"));
}

#[test]
fn invalid_source_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    smart_bookmarker_bin(&home)
        .args(["--source", "secondary"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("secondary"));
}

#[test]
fn text_with_daemon_conflicts() {
    let home = TempDir::new().unwrap();
    smart_bookmarker_bin(&home)
        .args(["--daemon", "some text"])
        .assert()
        .code(2);
}

#[test]
#[cfg(unix)]
fn daemon_command_without_daemon() {
    let home = TempDir::new().unwrap();
    smart_bookmarker_bin(&home)
        .args(["daemon", "capture"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No daemon running"));
}

#[test]
fn health_reports_unreachable_service() {
    let home = TempDir::new().unwrap();
    smart_bookmarker_bin(&home)
        .args(["health", "-e", &unreachable_endpoint()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Service unreachable"));
}

#[test]
fn unreachable_service_fails_capture() {
    let home = TempDir::new().unwrap();
    smart_bookmarker_bin(&home)
        .args(["--no-notify", "-e", &unreachable_endpoint(), "some text"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to save selection: "));
}

#[test]
fn invalid_config_file_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("smart-bookmarker");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "this is = = not toml").unwrap();

    smart_bookmarker_bin(&home)
        .args(["--no-notify", "-e", &unreachable_endpoint(), "   "])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"));
}
