//! Integration tests that run the CLI binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Binary with an isolated config dir and no CHATMARK_* overrides from the caller.
fn bin(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatmark"));
    cmd.env_remove("CHATMARK_FORMAT")
        .env_remove("CHATMARK_MATH")
        .env_remove("CHATMARK_WIDTH")
        .env("CHATMARK_CONFIG_DIR", config_dir)
        .env("NO_COLOR", "1")
        // Run from the temp dir so dotenv() won't load .env from project root
        .current_dir(config_dir);
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("binary not found - run cargo build first")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = run(bin(tmp.path()).arg("--help"));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("chatmark"));
    assert!(out.contains("--format"), "expected usage text in output");
}

#[test]
fn cli_version_succeeds() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = run(bin(tmp.path()).arg("--version"));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("chatmark"));
}

#[test]
fn message_as_json_nodes() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = run(bin(tmp.path()).args(["-m", "**hi** there", "--format", "json"]));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let nodes: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(
        nodes,
        serde_json::json!([
            {"type": "bold", "value": "hi"},
            {"type": "plain_text", "value": " there"}
        ])
    );
}

#[test]
fn file_input_plain_with_table() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = tmp.path().join("reply.md");
    std::fs::write(&path, "Results:\nname | score\n---|---\nada | 3\n").expect("write input");

    let output = run(bin(tmp.path()).arg(&path).args(["-f", "plain"]));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("Results:\n"));
    assert!(out.contains("│ name │ score │"));
    assert!(out.contains("│ ada  │ 3     │"));
}

#[test]
fn math_renderer_flag() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let unicode = run(bin(tmp.path()).args(["-m", "area $\\pi r^2$", "-f", "plain"]));
    assert_eq!(stdout(&unicode), "area π r²\n");

    let raw = run(bin(tmp.path()).args(["-m", "area $\\pi r^2$", "-f", "plain", "--math", "raw"]));
    assert_eq!(stdout(&raw), "area \\pi r^2\n");
}

#[test]
fn missing_file_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = run(bin(tmp.path()).arg("does-not-exist.md"));

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("Error:"), "got: {}", err);
    assert!(err.contains("does-not-exist.md"));
}

#[test]
fn invalid_env_setting_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = run(bin(tmp.path())
        .env("CHATMARK_FORMAT", "html")
        .args(["-m", "hi"]));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("CHATMARK_FORMAT"));
}

#[test]
fn env_format_applies() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = run(bin(tmp.path())
        .env("CHATMARK_FORMAT", "json")
        .args(["-m", "plain"]));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("\"plain_text\""));
}

#[test]
fn config_command_reports_file_settings() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    std::fs::write(tmp.path().join("config.json"), r#"{"width": 40}"#).expect("write config");

    let output = run(bin(tmp.path()).arg("config"));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("(found)"));
    assert!(out.contains("Width:        40 (config file)"));
    assert!(out.contains("Format:       Styled (default)"));
}

#[test]
fn invalid_config_file_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    std::fs::write(tmp.path().join("config.json"), r#"{"colour": "red"}"#).expect("write config");

    let output = run(bin(tmp.path()).args(["-m", "hi"]));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid config file"));
}

#[test]
fn stdin_list_is_rendered() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let mut child = bin(tmp.path())
        .args(["-", "-f", "plain"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"- one\n2. two\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "• one\n2. two\n");
}
