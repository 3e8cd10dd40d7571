//! CLI integration tests
//!
//! These tests run the compiled `filerev` binary directly, driving the shell
//! through scripts and piped stdin against a temporary root directory.

use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_filerev"))
}

/// Reads shell output until a commit's "Hash:" detail line, returns the hash.
fn read_hash(stdout: &mut impl BufRead) -> String {
    loop {
        let mut line = String::new();
        assert!(
            stdout.read_line(&mut line).unwrap() > 0,
            "stdout closed before a Hash: line"
        );
        if let Some(rest) = line.trim_start().strip_prefix("Hash:") {
            return rest.trim().to_string();
        }
    }
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_exits_zero() {
    let status = bin().arg("--help").status().expect("failed to run binary");
    assert!(status.success(), "--help should exit 0");
}

#[test]
fn test_version_flag() {
    let output = bin().arg("--version").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("filerev"),
        "version output should contain binary name, got: {}",
        stdout
    );
}

// ── scripted sessions ─────────────────────────────────────────────────────────

#[test]
fn test_scripted_session_commit_log_and_revert_miss() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("f.txt"), "keep").unwrap();

    let script = tmp.path().join("session.frs");
    std::fs::write(
        &script,
        "# demo session\n\
         init\n\
         commit f.txt first commit\n\
         log\n\
         revert f.txt deadbeef\n\
         quit\n",
    )
    .unwrap();

    let output = bin()
        .arg("--root").arg(tmp.path())
        .arg("--script").arg(&script)
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Repository initialized"));
    assert!(stdout.contains("Changes committed to 'f.txt'"));
    assert!(stdout.contains("first commit"), "log table should show the message");
    assert!(stdout.contains("No commit with hash 'deadbeef' found for file 'f.txt'"));

    // The failed revert must not have touched the file.
    assert_eq!(std::fs::read_to_string(tmp.path().join("f.txt")).unwrap(), "keep");
}

#[test]
fn test_scripted_log_json_on_empty_history() {
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("session.frs");
    std::fs::write(&script, "log --json\nquit\n").unwrap();

    let output = bin()
        .arg("--root").arg(tmp.path())
        .arg("--script").arg(&script)
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn test_scripted_verify_reports_clean_history() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("f.txt"), "x").unwrap();

    let script = tmp.path().join("session.frs");
    std::fs::write(&script, "commit f.txt m\nverify\nquit\n").unwrap();

    let output = bin()
        .arg("--root").arg(tmp.path())
        .arg("--script").arg(&script)
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("All 1 commits verified"));
}

// ── piped end-to-end session ──────────────────────────────────────────────────

#[test]
fn test_piped_session_commits_and_reverts_by_hash() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("f.txt"), "A").unwrap();

    let mut child = bin()
        .arg("--root").arg(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    let mut stdin = child.stdin.take().unwrap();
    let mut stdout = BufReader::new(child.stdout.take().unwrap());

    writeln!(stdin, "commit f.txt m1").unwrap();
    let hash1 = read_hash(&mut stdout);
    assert_eq!(hash1.len(), 64);

    std::fs::write(tmp.path().join("f.txt"), "A B").unwrap();
    writeln!(stdin, "commit f.txt m2").unwrap();
    let hash2 = read_hash(&mut stdout);
    assert_ne!(hash1, hash2, "content changed, hashes must differ");

    writeln!(stdin, "revert f.txt {hash1}").unwrap();
    drop(stdin);

    let status = child.wait().expect("failed to wait on binary");
    assert!(status.success());

    assert_eq!(std::fs::read_to_string(tmp.path().join("f.txt")).unwrap(), "A");
}
