use super::*;
use crate::params::cell_aggregates;

use std::fs;

fn sample_store() -> ParameterStore {
    let content = "Cell Name = Mixer\nParameter Name = gain\nParameter Address = 12\n\n\n\
                   Cell Name = Mixer\nParameter Name = trim\nParameter Address = 9\n\n\n\
                   Cell Name = Delay_A\nParameter Name = delay\nParameter Address = 786\n";
    ParameterStore::parse(content)
}

#[test]
fn test_csv_field_quoting() {
    assert_eq!(csv_field("plain"), "plain");
    assert_eq!(csv_field("691, 692"), "\"691, 692\"");
    assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
}

#[test]
fn test_write_table_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("params.csv");

    write_table(&path, &sample_store()).expect("write table");

    let written = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "cell_name,parameter_name,parameter_address");
    assert_eq!(lines[1], "Mixer,gain,12");
    assert_eq!(lines[3], "Delay_A,delay,786");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_write_address_lists_quotes_joined_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lists.csv");
    let store = sample_store();
    let cells = cell_aggregates(&store);

    write_address_lists(&path, &cells).expect("write lists");

    let written = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "cell_name,address_count,addresses");
    assert_eq!(lines[1], "Delay_A,1,786");
    assert_eq!(lines[2], "Mixer,2,\"9, 12\"");
}

#[test]
fn test_write_address_ranges_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ranges.csv");
    let store = sample_store();
    let cells = cell_aggregates(&store);

    write_address_ranges(&path, &cells).expect("write ranges");

    let written = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines[0],
        "cell_name,address_count,min_address,max_address,address_range"
    );
    assert_eq!(lines[1], "Delay_A,1,786,786,786");
    assert_eq!(lines[2], "Mixer,2,9,12,\"[9, 12]\"");
}

#[test]
fn test_export_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    let store = sample_store();

    write_table(&first, &store).expect("first write");
    write_table(&second, &store).expect("second write");

    assert_eq!(
        fs::read_to_string(&first).expect("read first"),
        fs::read_to_string(&second).expect("read second")
    );
}

#[test]
fn test_write_failure_reports_path() {
    let store = sample_store();
    let path = std::path::Path::new("missing-dir/params.csv");

    let result = write_table(path, &store);

    assert!(matches!(
        result,
        Err(crate::shared::ScanError::WriteFailure { .. })
    ));
}
