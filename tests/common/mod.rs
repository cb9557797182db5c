//! Shared test utilities and fixtures
//!
//! Runs the compiled binary from an isolated working directory.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Captured result of one `incometax` run.
pub struct Run {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<Output> for Run {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8(output.stdout).expect("stdout is utf-8"),
            stderr: String::from_utf8(output.stderr).expect("stderr is utf-8"),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

fn command(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_incometax"));
    cmd.current_dir(cwd);
    cmd
}

/// Run the binary with no arguments from `cwd`.
pub fn run_in(cwd: &Path) -> Run {
    command(cwd).output().expect("spawn incometax").into()
}

/// Run the binary with extra arguments from `cwd`.
pub fn run_with_args(cwd: &Path, args: &[&str]) -> Run {
    command(cwd)
        .args(args)
        .output()
        .expect("spawn incometax")
        .into()
}

/// Run the binary with one extra environment variable set.
pub fn run_with_env(cwd: &Path, key: &str, value: &str) -> Run {
    command(cwd)
        .env(key, value)
        .output()
        .expect("spawn incometax")
        .into()
}
