use super::catalogue::{STATIC_REGISTERS, attributes_for};
use super::presets::{Card, GENERIC_PRESET};
use super::resolver::{Resolution, ResolvedEntry};

// The fragment sits inside a parent profile document.
const INDENT: &str = "                ";

const SAMPLE_RATE: u32 = 48000;
const CHECKSUM_PLACEHOLDER: &str = "CHECKSUM";

/// Fixed SPDIF transmitter user-data slots, stored with the profile.
const SPDIF_TX_USER_DATA: &[(&str, u32)] = &[
    ("spdifTXUserDataSource", 63135),
    ("spdifTXUserDataL0", 63135),
    ("spdifTXUserDataL1", 63168),
    ("spdifTXUserDataL2", 63169),
    ("spdifTXUserDataL3", 63170),
    ("spdifTXUserDataL4", 63171),
    ("spdifTXUserDataL5", 63172),
    ("spdifTXUserDataR0", 63173),
    ("spdifTXUserDataR1", 63185),
];

fn metadata_line(type_id: &str, attributes: Option<&str>, value: &str) -> String {
    match attributes {
        Some(attrs) => format!("{INDENT}<metadata type=\"{type_id}\" {attrs}>{value}</metadata>"),
        None => format!("{INDENT}<metadata type=\"{type_id}\">{value}</metadata>"),
    }
}

/// Render the metadata document: preamble, static-fixed registers, then
/// the catalogue entries in declared order. Resolved entries render as
/// value elements with their attribute set; unmapped entries render as
/// comments so the missing slots stay visible in the output.
pub fn render(entries: &[ResolvedEntry], card: Option<Card>, version: Option<&str>) -> String {
    let preset = card.map(Card::preset).unwrap_or(GENERIC_PRESET);
    let profile_version = version.unwrap_or(preset.default_version);

    let mut lines = Vec::new();

    lines.push(metadata_line("sampleRate", None, &SAMPLE_RATE.to_string()));
    lines.push(metadata_line("profileName", None, preset.profile_name));
    lines.push(metadata_line("profileVersion", None, profile_version));
    lines.push(metadata_line("programID", None, preset.program_id));
    lines.push(metadata_line(
        "modelName",
        Some(&format!("modelID=\"{}\"", preset.model_id)),
        preset.model_name,
    ));
    lines.push(metadata_line("checksum", None, CHECKSUM_PLACEHOLDER));

    for (type_id, address) in SPDIF_TX_USER_DATA {
        lines.push(metadata_line(
            type_id,
            Some(r#"storable="yes""#),
            &address.to_string(),
        ));
    }

    lines.push(format!("{INDENT}<!-- DSP parameters from .params file -->"));

    for (type_id, address) in STATIC_REGISTERS {
        lines.push(metadata_line(type_id, None, &address.to_string()));
    }

    for resolved in entries {
        match &resolved.resolution {
            Resolution::Value(value) => lines.push(metadata_line(
                resolved.entry.type_id,
                attributes_for(resolved.entry.type_id),
                value,
            )),
            Resolution::Unmapped => lines.push(format!(
                "{INDENT}<!-- {}: {} - NOT MAPPED -->",
                resolved.entry.type_id, resolved.entry.comment
            )),
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "test_descriptor.rs"]
mod tests;
