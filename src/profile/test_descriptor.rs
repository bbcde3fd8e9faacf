use super::*;
use crate::params::{ParameterStore, cell_aggregates};
use crate::profile::resolver::resolve_catalogue;

fn render_for(content: &str, card: Option<Card>, version: Option<&str>) -> String {
    let store = ParameterStore::parse(content);
    let cells = cell_aggregates(&store);
    let resolved = resolve_catalogue(&store, &cells);
    render(&resolved, card, version)
}

const DELAY_BLOCK: &str =
    "Cell Name = Delay_A\nParameter Name = DelaySigma300Alg1delay\nParameter Address = 786\n";

#[test]
fn test_preamble_order_and_placeholders() {
    let document = render_for(DELAY_BLOCK, None, None);
    let lines: Vec<&str> = document.lines().collect();

    assert_eq!(
        lines[0],
        "                <metadata type=\"sampleRate\">48000</metadata>"
    );
    assert_eq!(
        lines[1],
        "                <metadata type=\"profileName\">NAME</metadata>"
    );
    assert_eq!(
        lines[2],
        "                <metadata type=\"profileVersion\">0</metadata>"
    );
    assert_eq!(
        lines[3],
        "                <metadata type=\"programID\">NAME</metadata>"
    );
    assert_eq!(
        lines[4],
        "                <metadata type=\"modelName\" modelID=\"NAME\">NAME</metadata>"
    );
    assert_eq!(
        lines[5],
        "                <metadata type=\"checksum\">CHECKSUM</metadata>"
    );
}

#[test]
fn test_card_preset_substitution() {
    let document = render_for(DELAY_BLOCK, Some(Card::Beocreate), None);

    assert!(document.contains("<metadata type=\"profileName\">Beocreate Universal</metadata>"));
    assert!(document.contains("<metadata type=\"profileVersion\">11</metadata>"));
    assert!(document.contains("<metadata type=\"programID\">beocreate-universal</metadata>"));
    assert!(document.contains(
        "<metadata type=\"modelName\" modelID=\"beocreate-4ca-mk1\">Beocreate 4-Channel Amplifier</metadata>"
    ));
}

#[test]
fn test_version_override_beats_preset_default() {
    let document = render_for(DELAY_BLOCK, Some(Card::Dacdsp), Some("21"));

    assert!(document.contains("<metadata type=\"profileVersion\">21</metadata>"));
    assert!(!document.contains("<metadata type=\"profileVersion\">15</metadata>"));
}

#[test]
fn test_spdif_user_data_block_is_fixed() {
    let document = render_for(DELAY_BLOCK, None, None);

    assert!(document.contains(
        "<metadata type=\"spdifTXUserDataSource\" storable=\"yes\">63135</metadata>"
    ));
    assert!(
        document.contains("<metadata type=\"spdifTXUserDataR1\" storable=\"yes\">63185</metadata>")
    );
}

#[test]
fn test_static_registers_precede_catalogue_entries() {
    let document = render_for(DELAY_BLOCK, None, None);

    let static_pos = document
        .find("canBecomeDaisyChainSlaveRegister")
        .expect("static register missing");
    let catalogue_pos = document
        .find("delayARegister")
        .expect("catalogue entry missing");
    assert!(static_pos < catalogue_pos);
    assert!(document.contains("<metadata type=\"muteRegister\">4834</metadata>"));
}

#[test]
fn test_resolved_delay_carries_delay_attributes() {
    let document = render_for(DELAY_BLOCK, None, None);

    assert!(document.contains(
        "<metadata type=\"delayARegister\" maxDelay=\"2000\" storable=\"yes\">786</metadata>"
    ));
}

#[test]
fn test_resolved_channel_select_carries_channel_attributes() {
    let content =
        "Cell Name = Channel Select.Ch_A\nParameter Name = monomuxSigma300ns4index\nParameter Address = 31\n";
    let document = render_for(content, None, None);

    assert!(document.contains(
        "<metadata type=\"channelSelectARegister\" channels=\"left,right,mono,side\" multiplier=\"1\" storable=\"yes\">31</metadata>"
    ));
}

#[test]
fn test_unmapped_entry_renders_as_comment() {
    // Nothing in this dump matches the balance control.
    let document = render_for(DELAY_BLOCK, None, None);

    assert!(document.contains("<!-- balanceRegister: L-R Balance control - NOT MAPPED -->"));
    assert!(!document.contains("<metadata type=\"balanceRegister\""));
}

#[test]
fn test_filter_bank_value_with_storable_attribute() {
    let blocks: Vec<String> = (691..=770)
        .enumerate()
        .map(|(index, address)| {
            format!(
                "Cell Name = Loudspeaker EQ.IIR_A\nParameter Name = coeff{index}\nParameter Address = {address}"
            )
        })
        .collect();
    let document = render_for(&blocks.join("\n\n\n"), None, None);

    assert!(document.contains("<metadata type=\"IIR_A\" storable=\"yes\">691/80</metadata>"));
}

#[test]
fn test_rendering_is_deterministic() {
    let first = render_for(DELAY_BLOCK, Some(Card::Dspaddon), None);
    let second = render_for(DELAY_BLOCK, Some(Card::Dspaddon), None);

    assert_eq!(first, second);
}
