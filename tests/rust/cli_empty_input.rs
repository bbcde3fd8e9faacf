use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn cli_empty_input_fails_without_writing_exports() {
    let dir = tempdir().expect("create tempdir");
    let input = dir.path().join("partial.params");
    // A block missing its address yields zero records.
    fs::write(&input, "Cell Name = Delay_A\nParameter Name = delay\n").expect("write sample input");
    let output = dir.path().join("out.csv");

    let mut cmd = Command::cargo_bin("paramscan").expect("binary not found");
    cmd.arg(&input).args(["--output"]).arg(&output);
    cmd.assert().failure();

    assert!(!output.exists());
}

#[test]
fn cli_missing_input_is_reported() {
    let mut cmd = Command::cargo_bin("paramscan").expect("binary not found");
    cmd.arg("no-such-file.params");
    let assert = cmd.assert().failure();

    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no-such-file.params"));
}
