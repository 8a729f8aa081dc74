//! Assertion helpers for command outputs.

use std::process::Output;

/// Assert the command exited successfully, printing stderr on failure.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got failure\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Assert the command exited with a failure status.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected failure, got success\nstdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

/// Assert stdout contains the given text.
pub fn assert_stdout_contains(output: &Output, text: &str) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(text),
        "stdout did not contain {text:?}\nstdout: {stdout}"
    );
}

/// Assert stderr contains the given text.
pub fn assert_stderr_contains(output: &Output, text: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(text),
        "stderr did not contain {text:?}\nstderr: {stderr}"
    );
}
