use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn run_lexis(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexis"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run lexis")
}

#[test]
fn text_dump_of_fixture() {
    let path = fixture_path("sample.lx");
    let output = run_lexis(&[path.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "lexis failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).expect("output is valid UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "2\tIDENTIFIER done");
    assert_eq!(lines[8], "5\tINTEGER 42");
    assert_eq!(lines[12], "6\tTRUE true");
}

#[test]
fn json_dump_of_fixture() {
    let path = fixture_path("sample.lx");
    let output = run_lexis(&["--format", "json", path.to_str().unwrap()]);
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output should be valid");
    let records = parsed.as_array().expect("top level is an array");
    assert_eq!(records.len(), 13);
    assert_eq!(records[1]["kind"], "SYMBOL");
    assert_eq!(records[1]["symbol"], "=");
}

#[test]
fn reads_stdin_without_file() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lexis"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn lexis");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"x + 1")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for lexis");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "1\tIDENTIFIER x\n1\tSYMBOL '+'\n1\tINTEGER 1\n"
    );
}

#[test]
fn overflow_fails_with_diagnostic() {
    let path = fixture_path("overflow.lx");
    let output = run_lexis(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("3000000000"), "stderr: {stderr}");
}

#[test]
fn missing_file_fails() {
    let output = run_lexis(&["no/such/file.lx"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("read source file"), "stderr: {stderr}");
}
