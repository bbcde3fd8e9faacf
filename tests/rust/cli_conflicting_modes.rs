use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn cli_conflicting_modes_abort_before_any_write() {
    let dir = tempdir().expect("create tempdir");
    let input = dir.path().join("sample.params");
    fs::write(
        &input,
        "Cell Name = Delay_A\nParameter Name = DelaySigma300Alg1delay\nParameter Address = 786\n",
    )
    .expect("write sample input");
    let output = dir.path().join("out.csv");

    let mut cmd = Command::cargo_bin("paramscan").expect("binary not found");
    cmd.arg(&input)
        .arg("--address-lists")
        .arg("--address-range")
        .args(["--output"])
        .arg(&output);
    cmd.assert().failure();

    // The conflict is reported before the pipeline touches the filesystem.
    assert!(!output.exists());
}
