//! Integration tests for templar-cli.

mod common;

use std::fs;

use common::Sandbox;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("templar"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("load"));
}

#[test]
fn test_version_flag() {
    Sandbox::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_greet_scenario() {
    let sb = Sandbox::new();
    sb.file("hello.txt", "Hello");

    sb.cmd()
        .args(["create", "greet", "--from", "hello.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template 'greet' created"));

    assert_eq!(sb.read(sb.body_path("greet")), "Hello");
    assert_eq!(sb.registry(), "{\n    \"greet\": \".txt\"\n}");

    // Empty target with the same extension: no confirmation needed.
    let target = sb.file("empty.txt", "");
    sb.cmd()
        .args(["load", "greet", "--into", "empty.txt"])
        .assert()
        .success();
    assert_eq!(sb.read(target), "Hello");
}

#[test]
fn test_load_into_missing_file_creates_it() {
    let sb = Sandbox::new();
    sb.create("greet", "hello.txt", "Hello");

    sb.cmd()
        .args(["load", "greet", "--into", "fresh.txt"])
        .assert()
        .success();

    assert_eq!(sb.read(sb.work_dir().join("fresh.txt")), "Hello");
}

#[test]
fn test_load_with_yes_overwrites_and_ignores_extension() {
    let sb = Sandbox::new();
    sb.create("py", "snippet.py", "print('hi')\n");
    let target = sb.file("notes.md", "old notes");

    sb.cmd()
        .args(["load", "py", "--into", "notes.md", "--yes"])
        .assert()
        .success();

    assert_eq!(sb.read(target), "print('hi')\n");
}

#[test]
fn test_create_from_active_file() {
    let sb = Sandbox::new();
    let active = sb.file("main.rs", "fn main() {}\n");

    sb.cmd()
        .env("TEMPLAR_ACTIVE_FILE", &active)
        .args(["create", "rust-main"])
        .assert()
        .success();

    assert_eq!(sb.registry(), "{\n    \"rust-main\": \".rs\"\n}");
}

#[test]
fn test_missing_from_falls_back_to_active_file() {
    let sb = Sandbox::new();
    let active = sb.file("active.py", "x = 1\n");

    sb.cmd()
        .args(["create", "t", "--from", "does-not-exist.txt", "--active-file"])
        .arg(&active)
        .assert()
        .success();

    assert_eq!(sb.read(sb.body_path("t")), "x = 1\n");
    assert!(sb.registry().contains("\".py\""));
}

#[test]
fn test_load_into_active_file() {
    let sb = Sandbox::new();
    sb.create("greet", "hello.txt", "Hello");
    let active = sb.file("open.txt", "");

    sb.cmd()
        .args(["load", "greet", "--active-file"])
        .arg(&active)
        .assert()
        .success();

    assert_eq!(sb.read(active), "Hello");
}

#[test]
fn test_remove_deletes_body_and_entry() {
    let sb = Sandbox::new();
    sb.create("foo", "foo.txt", "foo");

    sb.cmd()
        .args(["rm", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template 'foo' removed"));

    assert!(!sb.body_path("foo").exists());
    assert_eq!(sb.registry(), "{}");
    sb.cmd()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_formats() {
    let sb = Sandbox::new();
    sb.create("alpha", "a.rs", "a");
    sb.create("beta", "b", "b");

    let output = sb
        .cmd()
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().any(|e| e["name"] == "alpha" && e["extension"] == ".rs"));
    assert!(entries.iter().any(|e| e["name"] == "beta" && e["extension"] == ""));

    sb.cmd()
        .args(["ls", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,extension\n"))
        .stdout(predicate::str::contains("alpha,.rs"));

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Templates:"))
        .stdout(predicate::str::contains("beta"));
}

#[test]
fn test_list_on_empty_store() {
    Sandbox::new()
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates yet"));
}

#[test]
fn test_edit_runs_configured_editor() {
    let sb = Sandbox::new();
    sb.create("greet", "hello.txt", "Hello");
    let config = sb.file("config.toml", "[editor]\ncommand = \"true\"\n");

    sb.cmd()
        .arg("--config")
        .arg(&config)
        .args(["edit", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished editing 'greet'"));
}

#[test]
fn test_edit_falls_back_to_visual() {
    let sb = Sandbox::new();
    sb.create("greet", "hello.txt", "Hello");

    sb.cmd()
        .env("VISUAL", "true")
        .args(["edit", "greet"])
        .assert()
        .success();
}

#[test]
fn test_doctor_adopts_orphan_body() {
    let sb = Sandbox::new();
    sb.create("kept", "k.txt", "k");
    fs::write(sb.body_path("manual"), "dropped in by hand").unwrap();

    sb.cmd()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered template 'manual'"));

    assert_eq!(
        sb.registry(),
        "{\n    \"kept\": \".txt\",\n    \"manual\": \"\"\n}"
    );

    sb.cmd()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registry is consistent"));
}

#[test]
fn test_doctor_drops_dangling_entry() {
    let sb = Sandbox::new();
    sb.create("ghost", "g.md", "boo");
    fs::remove_file(sb.body_path("ghost")).unwrap();

    sb.cmd()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed registry entry 'ghost'"));

    assert_eq!(sb.registry(), "{}");
}

#[test]
fn test_init_writes_config_once() {
    let sb = Sandbox::new();
    let config = sb.work_dir().join("templar.toml");

    sb.cmd()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    let written = sb.read(&config);
    assert!(written.contains("[storage]"));
    assert!(written.contains("[output]"));

    sb.cmd()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    sb.cmd()
        .arg("--config")
        .arg(&config)
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_get_reflects_data_dir_flag() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "get", "storage.data_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            sb.data_dir().display().to_string(),
        ));
}

#[test]
fn test_config_reads_environment() {
    let sb = Sandbox::new();

    sb.cmd()
        .env("TEMPLAR_EDITOR__COMMAND", "nano")
        .args(["config", "get", "editor.command"])
        .assert()
        .success()
        .stdout("nano\n");
}

#[test]
fn test_completions_bash() {
    Sandbox::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("templar"));
}

#[test]
fn test_log_file_is_truncated_per_run() {
    let sb = Sandbox::new();
    let log = sb.file("templar.log", "stale line from an earlier run\n");

    sb.cmd()
        .arg("--log-file")
        .arg(&log)
        .args(["-v", "list"])
        .assert()
        .success();

    let contents = sb.read(&log);
    assert!(!contents.contains("stale line"));
    assert!(contents.contains("Templar completed successfully"));
}
