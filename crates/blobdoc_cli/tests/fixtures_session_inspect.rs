#![allow(missing_docs)]

use std::process::Command;

use blobdoc_testkit::fixture_path;

fn run_blobdoc(args: &[&str]) -> std::process::Output {
	Command::new(env!("CARGO_BIN_EXE_blobdoc")).args(args).output().expect("blobdoc command executes")
}

#[test]
fn inspect_prints_session_structure() {
	let fixture = fixture_path("session.blob");
	let fixture = fixture.to_string_lossy().into_owned();
	let output = run_blobdoc(&["inspect", &fixture]);

	assert!(output.status.success(), "inspect failed: {}", String::from_utf8_lossy(&output.stderr));
	let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
	let lines: Vec<&str> = stdout.lines().collect();

	assert!(lines.contains(&"compression: none"));
	assert!(lines.contains(&"structure:"));
	assert!(lines.contains(&"Map:"));
	assert!(lines.contains(&"  Key: _session (string)"));
	assert!(lines.contains(&"  Value: (Session)"));
	assert!(lines.contains(&"    Struct Session:"));
	assert!(lines.contains(&"      Field options (&Options):"));
	assert!(lines.contains(&"        Struct Options:"));
	assert!(lines.contains(&"            2592000 (i64)"));
	assert!(lines.contains(&"  Key: expires_at (string)"));
	assert!(lines.contains(&"    1700000000 (i64)"));
	assert!(lines.contains(&"  Value: ([any])"));
	assert!(stdout.contains("Key: 1 (i64)"), "expected integer key in session values");
	assert!(!stdout.contains("_gothic_session"), "hidden field value leaked");
	assert!(!stdout.contains("Field store"), "hidden field leaked");
}

#[test]
fn inspect_indent_prefixes_every_tree_line() {
	let fixture = fixture_path("session.blob");
	let fixture = fixture.to_string_lossy().into_owned();
	let output = run_blobdoc(&["inspect", &fixture, "--indent", "| "]);

	assert!(output.status.success(), "inspect failed");
	let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
	let tree: Vec<&str> = stdout.lines().skip_while(|line| *line != "structure:").skip(1).collect();
	assert!(!tree.is_empty(), "expected tree output");
	assert!(tree.iter().all(|line| line.starts_with("| ")), "unprefixed line in {tree:?}");
}

#[test]
fn inspect_missing_file_fails_fast() {
	let output = run_blobdoc(&["inspect", "does-not-exist.blob"]);

	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: io:"), "unexpected stderr: {stderr}");
}

#[test]
fn inspect_rejects_zero_max_depth() {
	let fixture = fixture_path("session.blob");
	let fixture = fixture.to_string_lossy().into_owned();
	let output = run_blobdoc(&["inspect", &fixture, "--max-depth", "0"]);

	assert_eq!(output.status.code(), Some(2));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("--max-depth"), "unexpected stderr: {stderr}");
}

#[test]
fn inspect_max_depth_bounds_nesting() {
	let fixture = fixture_path("session.blob");
	let fixture = fixture.to_string_lossy().into_owned();

	let output = run_blobdoc(&["inspect", &fixture, "--max-depth", "2"]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("decode depth exceeded (max=2)"), "unexpected stderr: {stderr}");

	let output = run_blobdoc(&["inspect", &fixture, "--max-depth", "8"]);
	assert!(output.status.success(), "inspect failed: {}", String::from_utf8_lossy(&output.stderr));
}
