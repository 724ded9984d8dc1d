//! Integration tests for the pen-plot binary.
//!
//! These run the compiled binary against the scripts in `demos/`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn demo(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path.push(name);
    path.to_string_lossy().to_string()
}

/// Run the binary with the given args and stdin input.
fn run_binary(args: &[&str], input: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pen-plot"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("Non-UTF8 output")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

#[test]
fn test_binary_renders_square() {
    let out = run_binary(&[&demo("square.plot"), "-W", "10", "-H", "6"], "");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let expected = fs::read_to_string(demo("square.expect.txt")).unwrap();
    assert_eq!(stdout(&out), expected);
}

#[test]
fn test_binary_reports_bad_lines_and_continues() {
    let out = run_binary(&[&demo("bad_lines.plot"), "--width", "10", "--height", "6"], "");
    assert!(out.status.success());
    let err = stderr(&out);
    assert!(err.contains("Error decoding line: wiggle 1 2 - Unknown command: wiggle 1 2"));
    assert!(err.contains("Error decoding line: draw 0 0 x 0"));
    assert_eq!(
        stdout(&out),
        fs::read_to_string(demo("bad_lines.expect.txt")).unwrap()
    );
}

#[test]
fn test_binary_out_of_bounds_exits_nonzero() {
    let out = run_binary(&[&demo("out_of_bounds.plot"), "-W", "10", "-H", "6"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("draw command exceeds grid bounds"));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_binary_missing_file() {
    let out = run_binary(&["/nonexistent/script.plot", "-W", "3", "-H", "3"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("cannot read"));
}

#[test]
fn test_binary_prompts_for_missing_values() {
    let input = format!("{}\n5\n5\n", demo("vertical.plot"));
    let out = run_binary(&[], &input);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "> > > |....\n|....\n|....\n.....\n.....\n");
}

#[test]
fn test_binary_prompts_only_for_height() {
    let out = run_binary(&[&demo("vertical.plot"), "-W", "2"], "4\n");
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "> |.\n|.\n|.\n..\n");
}

#[test]
fn test_binary_rejects_bad_width() {
    let input = format!("{}\nwide\n5\n", demo("vertical.plot"));
    let out = run_binary(&[], &input);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid width 'wide'"));
}

#[test]
fn test_binary_unicode_output() {
    let out = run_binary(&[&demo("vertical.plot"), "-W", "2", "-H", "4", "-u"], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "│·\n│·\n│·\n··\n");
}

#[test]
fn test_binary_output_file() {
    let mut path = std::env::temp_dir();
    path.push(format!("pen-plot-test-{}.txt", std::process::id()));
    let target = path.to_string_lossy().to_string();
    let out = run_binary(
        &[&demo("never_down.plot"), "-W", "10", "-H", "6", "-o", &target],
        "",
    );
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    let written = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(
        written,
        fs::read_to_string(demo("never_down.expect.txt")).unwrap()
    );
}

#[test]
fn test_binary_reports_bad_lines_before_bounds_failure() {
    let out = run_binary(&[&demo("bad_then_out_of_bounds.plot"), "-W", "3", "-H", "3"], "");
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("Error decoding line: foo - Unknown command: foo"));
    assert!(err.contains("draw command exceeds grid bounds at line 3"));
    let decode_at = err.find("Error decoding line").unwrap();
    let bounds_at = err.find("draw command exceeds").unwrap();
    assert!(decode_at < bounds_at);
    // Each diagnostic is printed once, not echoed by the default log filter.
    assert_eq!(err.matches("foo").count(), 2);
    assert!(stdout(&out).is_empty());
}
