use super::*;

const SINGLE_BLOCK: &str = "Cell Name            = Delay_A\n\
                            Parameter Name       = DelaySigma300Alg1delay\n\
                            Parameter Address    = 786\n\
                            Parameter Value      = 0\n";

#[test]
fn test_parse_single_block() {
    let store = ParameterStore::parse(SINGLE_BLOCK);

    assert_eq!(store.len(), 1);
    assert_eq!(
        store.all()[0],
        ParameterRecord {
            cell_name: "Delay_A".to_string(),
            parameter_name: "DelaySigma300Alg1delay".to_string(),
            address: 786,
        }
    );
}

#[test]
fn test_parse_without_separator_is_one_block() {
    // A single blank line does not separate blocks, so the second set of
    // field lines overwrites the first (last line wins per field).
    let content = "Cell Name = A\nParameter Name = p1\nParameter Address = 1\n\n\
                   Cell Name = B\nParameter Name = p2\nParameter Address = 2\n";
    let store = ParameterStore::parse(content);

    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].cell_name, "B");
    assert_eq!(store.all()[0].address, 2);
}

#[test]
fn test_parse_multiple_blocks() {
    let content = "Cell Name = A\nParameter Name = p1\nParameter Address = 1\n\n\n\
                   Cell Name = B\nParameter Name = p2\nParameter Address = 2\n";
    let store = ParameterStore::parse(content);

    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].cell_name, "A");
    assert_eq!(store.all()[1].cell_name, "B");
}

#[test]
fn test_block_missing_address_is_dropped() {
    let content = "Cell Name = A\nParameter Name = p1\nParameter Address = 1\n\n\n\
                   Cell Name = B\nParameter Name = p2\n\n\n\
                   Cell Name = C\nParameter Name = p3\nParameter Address = 3\n";
    let store = ParameterStore::parse(content);

    assert_eq!(store.len(), 2);
    assert!(store.all().iter().all(|record| record.cell_name != "B"));
}

#[test]
fn test_field_order_within_block_does_not_matter() {
    let content = "Parameter Address = 42\nCell Name = Mixer\nParameter Name = gain\n";
    let store = ParameterStore::parse(content);

    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].address, 42);
}

#[test]
fn test_address_ignores_trailing_content() {
    let content = "Cell Name = A\nParameter Name = p\nParameter Address = 123 (0x7B)\n";
    let store = ParameterStore::parse(content);

    assert_eq!(store.all()[0].address, 123);
}

#[test]
fn test_address_must_start_with_digits() {
    let content = "Cell Name = A\nParameter Name = p\nParameter Address = addr 123\n";
    let store = ParameterStore::parse(content);

    assert!(store.is_empty());
}

#[test]
fn test_leading_and_trailing_blank_runs() {
    let content = "\n\n\n\nCell Name = A\nParameter Name = p\nParameter Address = 7\n\n\n\n";
    let store = ParameterStore::parse(content);

    assert_eq!(store.len(), 1);
}

#[test]
fn test_lookup_returns_last_occurrence() {
    let content = "Cell Name = A\nParameter Name = p\nParameter Address = 1\n\n\n\
                   Cell Name = A\nParameter Name = p\nParameter Address = 9\n";
    let store = ParameterStore::parse(content);

    assert_eq!(store.lookup("A", "p"), Some(9));
}

#[test]
fn test_lookup_missing_pair() {
    let store = ParameterStore::parse(SINGLE_BLOCK);

    assert_eq!(store.lookup("Delay_A", "other"), None);
    assert_eq!(store.lookup("Delay_B", "DelaySigma300Alg1delay"), None);
}

#[test]
fn test_by_cell_preserves_order() {
    let content = "Cell Name = A\nParameter Name = p1\nParameter Address = 5\n\n\n\
                   Cell Name = B\nParameter Name = q\nParameter Address = 6\n\n\n\
                   Cell Name = A\nParameter Name = p2\nParameter Address = 4\n";
    let store = ParameterStore::parse(content);

    let records = store.by_cell("A");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].parameter_name, "p1");
    assert_eq!(records[1].parameter_name, "p2");
}

#[test]
fn test_unique_cells() {
    let content = "Cell Name = A\nParameter Name = p1\nParameter Address = 5\n\n\n\
                   Cell Name = A\nParameter Name = p2\nParameter Address = 6\n\n\n\
                   Cell Name = B\nParameter Name = q\nParameter Address = 7\n";
    let store = ParameterStore::parse(content);

    let cells = store.unique_cells();
    assert_eq!(cells.len(), 2);
    assert!(cells.contains("A"));
    assert!(cells.contains("B"));
}

#[test]
fn test_filtered_narrows_to_cell() {
    let content = "Cell Name = A\nParameter Name = p1\nParameter Address = 5\n\n\n\
                   Cell Name = B\nParameter Name = q\nParameter Address = 6\n";
    let store = ParameterStore::parse(content);

    let narrowed = store.filtered("B");
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed.all()[0].cell_name, "B");
    assert!(store.filtered("C").is_empty());
}

#[test]
fn test_parse_file_missing_input() {
    let result = ParameterStore::parse_file("does-not-exist.params");

    assert!(matches!(
        result,
        Err(crate::shared::ScanError::InputAccess { .. })
    ));
}
