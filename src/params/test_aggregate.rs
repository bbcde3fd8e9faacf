use super::*;

fn store_from_addresses(cell: &str, addresses: &[u32]) -> ParameterStore {
    let blocks: Vec<String> = addresses
        .iter()
        .enumerate()
        .map(|(index, address)| {
            format!(
                "Cell Name = {cell}\nParameter Name = p{index}\nParameter Address = {address}\n"
            )
        })
        .collect();
    ParameterStore::parse(&blocks.join("\n\n\n"))
}

#[test]
fn test_single_address_cell() {
    let store = store_from_addresses("Delay_A", &[786]);
    let cells = cell_aggregates(&store);

    let aggregate = &cells["Delay_A"];
    assert_eq!(aggregate.count(), 1);
    assert_eq!(aggregate.min_address(), 786);
    assert_eq!(aggregate.max_address(), 786);
    assert_eq!(aggregate.display_range(), "786");
}

#[test]
fn test_filter_bank_sized_cell() {
    let addresses: Vec<u32> = (691..=770).collect();
    let store = store_from_addresses("Loudspeaker EQ.IIR_A", &addresses);
    let cells = cell_aggregates(&store);

    let aggregate = &cells["Loudspeaker EQ.IIR_A"];
    assert_eq!(aggregate.count(), 80);
    assert_eq!(aggregate.min_address(), 691);
    assert_eq!(aggregate.max_address(), 770);
    assert_eq!(aggregate.display_range(), "[691, 770]");
}

#[test]
fn test_duplicate_addresses_collapse() {
    let store = store_from_addresses("Levels", &[30, 10, 30, 20, 10]);
    let cells = cell_aggregates(&store);

    let aggregate = &cells["Levels"];
    assert_eq!(aggregate.count(), 3);
    assert_eq!(aggregate.addresses().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[test]
fn test_list_and_range_views_are_consistent() {
    let store = store_from_addresses("Mixer", &[44, 7, 44, 19]);
    let cells = cell_aggregates(&store);

    let aggregate = &cells["Mixer"];
    let listed: Vec<u32> = aggregate.addresses().collect();
    assert_eq!(listed.first().copied(), Some(aggregate.min_address()));
    assert_eq!(listed.last().copied(), Some(aggregate.max_address()));
    assert_eq!(listed.len(), aggregate.count());
}

#[test]
fn test_cells_are_sorted_for_display() {
    let content = "Cell Name = Zeta\nParameter Name = p\nParameter Address = 1\n\n\n\
                   Cell Name = Alpha\nParameter Name = q\nParameter Address = 2\n";
    let store = ParameterStore::parse(content);
    let cells = cell_aggregates(&store);

    let names: Vec<&str> = cells.keys().map(String::as_str).collect();
    assert_eq!(names, ["Alpha", "Zeta"]);
}
