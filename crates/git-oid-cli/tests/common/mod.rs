//! Shared test harness for the `oid` binary integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Path to the compiled `oid` binary.
pub fn oid_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_oid"))
}

fn base_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(oid_bin());
    cmd.args(args)
        .env_remove("RUST_LOG")
        .env("LC_ALL", "C");
    cmd
}

/// Run `oid` with the given arguments.
pub fn oid(args: &[&str]) -> CommandResult {
    let output = base_command(args).output().expect("failed to run oid");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// Run `oid` with piped stdin.
pub fn oid_stdin(args: &[&str], stdin_bytes: &[u8]) -> CommandResult {
    let mut cmd = base_command(args);
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("failed to spawn oid");
    child.stdin.take().unwrap().write_all(stdin_bytes).unwrap();
    let output = child.wait_with_output().expect("failed to wait on oid");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// Assert success and return stdout lines.
pub fn ok_lines(result: &CommandResult) -> Vec<String> {
    assert_eq!(
        result.exit_code, 0,
        "command failed:\nstdout: {}\nstderr: {}",
        result.stdout, result.stderr
    );
    result.stdout.lines().map(str::to_owned).collect()
}
