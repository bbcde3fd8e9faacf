use super::*;
use crate::params::{ParameterStore, cell_aggregates};
use crate::profile::catalogue::{CatalogueEntry, Mapping};

fn entry(type_id: &'static str, mapping: Mapping) -> CatalogueEntry {
    CatalogueEntry {
        type_id,
        mapping,
        comment: "test entry",
    }
}

fn sample_store() -> ParameterStore {
    let mut blocks = vec![
        "Cell Name = MasterVol\nParameter Name = HWGainADAU145XAlg5target\nParameter Address = 100"
            .to_string(),
    ];
    for (index, address) in (691..=770).enumerate() {
        blocks.push(format!(
            "Cell Name = Loudspeaker EQ.IIR_A\nParameter Name = coeff{index}\nParameter Address = {address}"
        ));
    }
    ParameterStore::parse(&blocks.join("\n\n\n"))
}

#[test]
fn test_direct_lookup_resolves_address() {
    let store = sample_store();
    let cells = cell_aggregates(&store);
    let entry = entry(
        "volumeControlRegister",
        Mapping::Direct {
            cell: "MasterVol",
            parameter: "HWGainADAU145XAlg5target",
        },
    );

    assert_eq!(
        resolve(&entry, &store, &cells),
        Resolution::Value("100".to_string())
    );
}

#[test]
fn test_direct_lookup_missing_is_unmapped() {
    let store = sample_store();
    let cells = cell_aggregates(&store);
    let entry = entry(
        "balanceRegister",
        Mapping::Direct {
            cell: "L-R Balance.Balance",
            parameter: "DCInpAlg145X11value",
        },
    );

    assert_eq!(resolve(&entry, &store, &cells), Resolution::Unmapped);
}

#[test]
fn test_filter_bank_encodes_start_and_count() {
    let store = sample_store();
    let cells = cell_aggregates(&store);
    let entry = entry(
        "IIR_A",
        Mapping::FilterBank {
            cell: "Loudspeaker EQ.IIR_A",
        },
    );

    assert_eq!(
        resolve(&entry, &store, &cells),
        Resolution::Value("691/80".to_string())
    );
}

#[test]
fn test_filter_bank_missing_cell_is_unmapped() {
    let store = sample_store();
    let cells = cell_aggregates(&store);
    let entry = entry(
        "IIR_B",
        Mapping::FilterBank {
            cell: "Loudspeaker EQ.IIR_B",
        },
    );

    assert_eq!(resolve(&entry, &store, &cells), Resolution::Unmapped);
}

#[test]
fn test_search_stays_unmapped_even_on_substring_hit() {
    // The store contains a matching parameter name, but search entries
    // are not resolved yet and must stay unmapped.
    let content =
        "Cell Name = SPDIF\nParameter Name = enableSPDIFswitch\nParameter Address = 55\n";
    let store = ParameterStore::parse(content);
    let cells = cell_aggregates(&store);
    let entry = entry(
        "enableSPDIFRegister",
        Mapping::Search {
            pattern: "enableSPDIF",
        },
    );

    assert_eq!(resolve(&entry, &store, &cells), Resolution::Unmapped);
}

#[test]
fn test_channel_pattern_yields_unknown_placeholder() {
    let store = sample_store();
    let cells = cell_aggregates(&store);
    let entry = entry(
        "levelsARegister",
        Mapping::ChannelPattern {
            cell_pattern: "Levels",
            parameter_pattern: "HWGainADAU145XAlg.*target",
            channel: 'A',
        },
    );

    assert_eq!(
        resolve(&entry, &store, &cells),
        Resolution::Value(UNKNOWN_VALUE.to_string())
    );
}

#[test]
fn test_resolve_catalogue_keeps_declared_order() {
    let store = sample_store();
    let cells = cell_aggregates(&store);

    let resolved = resolve_catalogue(&store, &cells);

    assert_eq!(resolved.len(), CATALOGUE.len());
    for (resolved_entry, catalogue_entry) in resolved.iter().zip(CATALOGUE) {
        assert_eq!(resolved_entry.entry.type_id, catalogue_entry.type_id);
    }
}
