use assert_cmd::Command;

#[test]
fn cli_help_lists_modes() {
    let mut cmd = Command::cargo_bin("paramscan").expect("binary not found");
    let assert = cmd.arg("--help").assert().success();

    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--address-lists"));
    assert!(stdout.contains("--address-range"));
    assert!(stdout.contains("--xml"));
    assert!(stdout.contains("--card"));
}
