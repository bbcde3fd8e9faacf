use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn cli_profile_metadata_to_stdout() {
    let dir = tempdir().expect("create tempdir");
    let input = dir.path().join("sample.params");
    fs::write(
        &input,
        "Cell Name = Delay_A\nParameter Name = DelaySigma300Alg1delay\nParameter Address = 786\n",
    )
    .expect("write sample input");

    let mut cmd = Command::cargo_bin("paramscan").expect("binary not found");
    cmd.arg(&input)
        .arg("--xml")
        .args(["--card", "beocreate"])
        .arg("--quiet");
    let assert = cmd.assert().success();

    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<metadata type=\"profileName\">Beocreate Universal</metadata>"));
    assert!(stdout.contains(
        "<metadata type=\"delayARegister\" maxDelay=\"2000\" storable=\"yes\">786</metadata>"
    ));
    assert!(stdout.contains("<!-- balanceRegister: L-R Balance control - NOT MAPPED -->"));
}

#[test]
fn cli_profile_metadata_to_file_with_version_override() {
    let dir = tempdir().expect("create tempdir");
    let input = dir.path().join("sample.params");
    fs::write(
        &input,
        "Cell Name = Delay_A\nParameter Name = DelaySigma300Alg1delay\nParameter Address = 786\n",
    )
    .expect("write sample input");
    let output = dir.path().join("profile.xml");

    let mut cmd = Command::cargo_bin("paramscan").expect("binary not found");
    cmd.arg(&input)
        .arg("--xml")
        .args(["--card", "dacdsp"])
        .args(["--profile-version", "21"])
        .args(["--output"])
        .arg(&output)
        .arg("--quiet");
    cmd.assert().success();

    let document = fs::read_to_string(&output).expect("read profile metadata");
    assert!(document.contains("<metadata type=\"profileVersion\">21</metadata>"));
    assert!(document.contains("<metadata type=\"programID\">dacdsp-universal</metadata>"));
}
