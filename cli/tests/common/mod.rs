//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;

/// Create a new command for the vistas binary.
pub fn vistas() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vistas"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `traverse` with the given arguments and return stdout.
pub fn traverse(args: &[&str]) -> String {
    let output = vistas()
        .arg("traverse")
        .args(args)
        .output()
        .expect("failed to execute command");
    assert!(
        output.status.success(),
        "traverse {:?} failed:\n{}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}
