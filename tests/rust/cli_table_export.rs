use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

const SAMPLE: &str = "Cell Name = Delay_A\n\
                      Parameter Name = DelaySigma300Alg1delay\n\
                      Parameter Address = 786\n\
                      \n\
                      \n\
                      Cell Name = Mixer\n\
                      Parameter Name = gain\n\
                      Parameter Address = 12\n";

#[test]
fn cli_table_export_writes_csv_rows() {
    let dir = tempdir().expect("create tempdir");
    let input = dir.path().join("sample.params");
    fs::write(&input, SAMPLE).expect("write sample input");
    let output = dir.path().join("params.csv");

    let mut cmd = Command::cargo_bin("paramscan").expect("binary not found");
    cmd.arg(&input).arg("--quiet").args(["--output"]).arg(&output);
    cmd.assert().success();

    let written = fs::read_to_string(&output).expect("read exported csv");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "cell_name,parameter_name,parameter_address");
    assert_eq!(lines[1], "Delay_A,DelaySigma300Alg1delay,786");
    assert_eq!(lines[2], "Mixer,gain,12");
}

#[test]
fn cli_range_export_is_idempotent() {
    let dir = tempdir().expect("create tempdir");
    let input = dir.path().join("sample.params");
    fs::write(&input, SAMPLE).expect("write sample input");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    for output in [&first, &second] {
        let mut cmd = Command::cargo_bin("paramscan").expect("binary not found");
        cmd.arg(&input)
            .arg("--address-range")
            .arg("--quiet")
            .args(["--output"])
            .arg(output);
        cmd.assert().success();
    }

    assert_eq!(
        fs::read_to_string(&first).expect("read first export"),
        fs::read_to_string(&second).expect("read second export")
    );
}

#[test]
fn cli_unknown_cell_filter_lists_available_cells() {
    let dir = tempdir().expect("create tempdir");
    let input = dir.path().join("sample.params");
    fs::write(&input, SAMPLE).expect("write sample input");

    let mut cmd = Command::cargo_bin("paramscan").expect("binary not found");
    cmd.arg(&input).args(["--cell", "Nope"]);
    let assert = cmd.assert().success();

    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cell 'Nope' not found"));
    assert!(stdout.contains("Delay_A"));
    assert!(stdout.contains("Mixer"));
}
