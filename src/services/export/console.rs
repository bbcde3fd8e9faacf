use std::collections::BTreeMap;

use crate::params::{CellAggregate, ParameterStore};

const RULE_WIDTH: usize = 100;
const MAX_INLINE_ADDRESSES: usize = 10;

pub fn print_table(store: &ParameterStore) {
    println!(
        "{:<40} {:<50} {:<10}",
        "Cell Name", "Parameter Name", "Address"
    );
    println!("{}", "-".repeat(RULE_WIDTH));

    for record in store.all() {
        println!(
            "{:<40} {:<50} {:<10}",
            record.cell_name, record.parameter_name, record.address
        );
    }
}

pub fn print_address_lists(cells: &BTreeMap<String, CellAggregate>) {
    println!("{:<40} {:<15} {}", "Cell Name", "Address Count", "Addresses");
    println!("{}", "-".repeat(RULE_WIDTH));

    for (cell_name, aggregate) in cells {
        println!(
            "{:<40} {:<15} {}",
            cell_name,
            aggregate.count(),
            elided_addresses(aggregate)
        );
    }
}

pub fn print_address_ranges(cells: &BTreeMap<String, CellAggregate>) {
    println!(
        "{:<40} {:<15} {}",
        "Cell Name", "Address Count", "Address Range"
    );
    println!("{}", "-".repeat(RULE_WIDTH));

    for (cell_name, aggregate) in cells {
        println!(
            "{:<40} {:<15} {}",
            cell_name,
            aggregate.count(),
            aggregate.display_range()
        );
    }
}

/// Detail view for a single cell in list mode.
pub fn print_cell_list(cell_name: &str, aggregate: &CellAggregate) {
    let addresses: Vec<String> = aggregate.addresses().map(|a| a.to_string()).collect();
    println!("Address list for cell '{}':", cell_name);
    println!("Address count: {}", aggregate.count());
    println!("Addresses: {}", addresses.join(", "));
}

/// Detail view for a single cell in range mode.
pub fn print_cell_range(cell_name: &str, aggregate: &CellAggregate) {
    println!("Address range for cell '{}':", cell_name);
    println!("Address count: {}", aggregate.count());
    println!("Address range: {}", aggregate.display_range());
}

pub fn print_summary(total_parameters: usize, unique_cells: usize, distinct_addresses: Option<usize>) {
    println!();
    println!("Summary:");
    println!("Total parameters: {}", total_parameters);
    println!("Unique cells: {}", unique_cells);
    if let Some(count) = distinct_addresses {
        println!("Distinct addresses: {}", count);
    }
}

fn elided_addresses(aggregate: &CellAggregate) -> String {
    let addresses: Vec<String> = aggregate.addresses().map(|a| a.to_string()).collect();
    if addresses.len() <= MAX_INLINE_ADDRESSES {
        addresses.join(", ")
    } else {
        format!(
            "{}, ... (+{} more)",
            addresses[..MAX_INLINE_ADDRESSES].join(", "),
            addresses.len() - MAX_INLINE_ADDRESSES
        )
    }
}
