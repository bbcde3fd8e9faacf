use clap::ValueEnum;
use serde::Deserialize;

/// Known device profiles selectable from the command line or config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Card {
    Beocreate,
    Dacdsp,
    Dspaddon,
}

/// Canned metadata for one card profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPreset {
    pub profile_name: &'static str,
    pub program_id: &'static str,
    pub model_name: &'static str,
    pub model_id: &'static str,
    pub default_version: &'static str,
}

/// Placeholders used when no card preset is selected.
pub const GENERIC_PRESET: CardPreset = CardPreset {
    profile_name: "NAME",
    program_id: "NAME",
    model_name: "NAME",
    model_id: "NAME",
    default_version: "0",
};

impl Card {
    pub fn preset(self) -> CardPreset {
        match self {
            Card::Beocreate => CardPreset {
                profile_name: "Beocreate Universal",
                program_id: "beocreate-universal",
                model_name: "Beocreate 4-Channel Amplifier",
                model_id: "beocreate-4ca-mk1",
                default_version: "11",
            },
            Card::Dacdsp => CardPreset {
                profile_name: "DAC+ DSP Universal",
                program_id: "dacdsp-universal",
                model_name: "DAC+ DSP",
                model_id: "hifiberry-dacdsp",
                default_version: "15",
            },
            Card::Dspaddon => CardPreset {
                profile_name: "DSP add-on",
                program_id: "dsp-addon",
                model_name: "DSP add-on",
                model_id: "dsp-addon",
                default_version: "14",
            },
        }
    }
}
