/// How a semantic control type maps onto parsed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    /// Exact (cell, parameter) pair lookup; last-inserted record wins.
    Direct {
        cell: &'static str,
        parameter: &'static str,
    },
    /// Whole-cell coefficient bank, encoded as `start/count`.
    FilterBank { cell: &'static str },
    /// Case-insensitive substring search over cell and parameter names.
    Search { pattern: &'static str },
    /// Channel-specific record behind a cell-name substring shared by
    /// several channels.
    ChannelPattern {
        cell_pattern: &'static str,
        parameter_pattern: &'static str,
        channel: char,
    },
}

/// One semantic control type the profile document tries to populate.
#[derive(Debug, Clone, Copy)]
pub struct CatalogueEntry {
    pub type_id: &'static str,
    pub mapping: Mapping,
    /// Rendered into the document when the entry stays unmapped.
    pub comment: &'static str,
}

const fn direct(
    type_id: &'static str,
    cell: &'static str,
    parameter: &'static str,
    comment: &'static str,
) -> CatalogueEntry {
    CatalogueEntry {
        type_id,
        mapping: Mapping::Direct { cell, parameter },
        comment,
    }
}

const fn filter_bank(
    type_id: &'static str,
    cell: &'static str,
    comment: &'static str,
) -> CatalogueEntry {
    CatalogueEntry {
        type_id,
        mapping: Mapping::FilterBank { cell },
        comment,
    }
}

const fn search(
    type_id: &'static str,
    pattern: &'static str,
    comment: &'static str,
) -> CatalogueEntry {
    CatalogueEntry {
        type_id,
        mapping: Mapping::Search { pattern },
        comment,
    }
}

const fn channel_pattern(
    type_id: &'static str,
    cell_pattern: &'static str,
    parameter_pattern: &'static str,
    channel: char,
    comment: &'static str,
) -> CatalogueEntry {
    CatalogueEntry {
        type_id,
        mapping: Mapping::ChannelPattern {
            cell_pattern,
            parameter_pattern,
            channel,
        },
        comment,
    }
}

/// The closed catalogue of semantic control types, in document order.
pub const CATALOGUE: &[CatalogueEntry] = &[
    direct(
        "balanceRegister",
        "L-R Balance.Balance",
        "DCInpAlg145X11value",
        "L-R Balance control",
    ),
    direct(
        "muteInvertRegister",
        "Soft Mute",
        "ExternalGainAlgSlew145X1slew_mode",
        "Soft mute invert control",
    ),
    direct(
        "volumeControlRegister",
        "MasterVol",
        "HWGainADAU145XAlg5target",
        "Master volume control",
    ),
    direct(
        "volumeLimitPiRegister",
        "VolumeLimitPi",
        "HWGainADAU145XAlg6target",
        "Volume limit for Pi input",
    ),
    direct(
        "volumeLimitSPDIFRegister",
        "VolumeLimitSPDIF",
        "HWGainADAU145XAlg7target",
        "Volume limit for SPDIF input",
    ),
    direct(
        "readSPDIFOnRegister",
        "Input Detection.SPDIF on read",
        "ReadBackAlgNewSigma3001Value",
        "Read SPDIF on status",
    ),
    direct(
        "channelSelectARegister",
        "Channel Select.Ch_A",
        "monomuxSigma300ns4index",
        "Channel A selection",
    ),
    direct(
        "channelSelectBRegister",
        "Channel Select.Ch_B",
        "monomuxSigma300ns3index",
        "Channel B selection",
    ),
    direct(
        "channelSelectCRegister",
        "Channel Select.Ch_C",
        "monomuxSigma300ns2index",
        "Channel C selection",
    ),
    direct(
        "channelSelectDRegister",
        "Channel Select.Ch_D",
        "monomuxSigma300ns1index",
        "Channel D selection",
    ),
    direct(
        "invertARegister",
        "Loudspeaker EQ.Invert_A",
        "EQS300Invert4invert",
        "Invert channel A",
    ),
    direct(
        "invertBRegister",
        "Loudspeaker EQ.Invert_B",
        "EQS300Invert3invert",
        "Invert channel B",
    ),
    direct(
        "invertCRegister",
        "Loudspeaker EQ.Invert_C",
        "EQS300Invert2invert",
        "Invert channel C",
    ),
    direct(
        "invertDRegister",
        "Loudspeaker EQ.Invert_D",
        "EQS300Invert1invert",
        "Invert channel D",
    ),
    direct(
        "delayARegister",
        "Delay_A",
        "DelaySigma300Alg1delay",
        "Delay for channel A",
    ),
    direct(
        "delayBRegister",
        "Delay_B",
        "DelaySigma300Alg4delay",
        "Delay for channel B",
    ),
    direct(
        "delayCRegister",
        "Delay_C",
        "DelaySigma300Alg3delay",
        "Delay for channel C",
    ),
    direct(
        "delayDRegister",
        "Delay_D",
        "DelaySigma300Alg2delay",
        "Delay for channel D",
    ),
    search(
        "readIsDaisyChainSlaveRegister",
        "readIsDaisyChainSlave",
        "Read daisy chain slave status - need to find in .params",
    ),
    search(
        "sensitivitySPDIFRegister",
        "sensitivitySPDIF",
        "SPDIF sensitivity - need to find in .params",
    ),
    search(
        "enableSPDIFRegister",
        "enableSPDIF",
        "Enable SPDIF - need to find in .params",
    ),
    search(
        "tuningForkPitchRegister",
        "tuningForkPitch",
        "Tuning fork pitch - need to find in .params",
    ),
    search(
        "tuningForkOnRegister",
        "tuningForkOn",
        "Tuning fork on - need to find in .params",
    ),
    filter_bank(
        "IIR_A",
        "Loudspeaker EQ.IIR_A",
        "IIR filter bank for channel A",
    ),
    filter_bank(
        "IIR_B",
        "Loudspeaker EQ.IIR_B",
        "IIR filter bank for channel B",
    ),
    filter_bank(
        "IIR_C",
        "Loudspeaker EQ.IIR_C",
        "IIR filter bank for channel C",
    ),
    filter_bank(
        "IIR_D",
        "Loudspeaker EQ.IIR_D",
        "IIR filter bank for channel D",
    ),
    filter_bank(
        "toneControlLeftRegisters",
        "Tone Controls.ToneControl_L",
        "Tone control filter bank for left channel",
    ),
    filter_bank(
        "toneControlRightRegisters",
        "Tone Controls.ToneControl_R",
        "Tone control filter bank for right channel",
    ),
    filter_bank(
        "customFilterRegisterBankLeft",
        "Room Compensation.IIR_L",
        "Custom filter bank for left channel (room compensation)",
    ),
    filter_bank(
        "customFilterRegisterBankRight",
        "Room Compensation.IIR_R",
        "Custom filter bank for right channel (room compensation)",
    ),
    channel_pattern(
        "levelsARegister",
        "Levels",
        "HWGainADAU145XAlg.*target",
        'A',
        "Level control for channel A - need to identify specific parameter",
    ),
    channel_pattern(
        "levelsBRegister",
        "Levels",
        "HWGainADAU145XAlg.*target",
        'B',
        "Level control for channel B - need to identify specific parameter",
    ),
    channel_pattern(
        "levelsCRegister",
        "Levels",
        "HWGainADAU145XAlg.*target",
        'C',
        "Level control for channel C - need to identify specific parameter",
    ),
    channel_pattern(
        "levelsDRegister",
        "Levels",
        "HWGainADAU145XAlg.*target",
        'D',
        "Level control for channel D - need to identify specific parameter",
    ),
];

/// Registers with fixed addresses outside the dump's working range,
/// emitted before the catalogue-driven entries.
pub const STATIC_REGISTERS: &[(&str, u32)] = &[
    ("canBecomeDaisyChainSlaveRegister", 4833),
    ("muteRegister", 4834),
    ("enableSPDIFTransmitterRegister", 4835),
    ("disableSPDIFTransmitterAtMuteRegister", 4836),
];

const STORABLE_TYPES: &[&str] = &[
    "volumeControlRegister",
    "volumeLimitPiRegister",
    "volumeLimitSPDIFRegister",
    "balanceRegister",
    "muteInvertRegister",
    "enableSPDIFRegister",
];

/// Output attributes for a control type, driven by its id pattern.
pub fn attributes_for(type_id: &str) -> Option<&'static str> {
    if type_id.starts_with("channelSelect") {
        Some(r#"channels="left,right,mono,side" multiplier="1" storable="yes""#)
    } else if type_id.starts_with("delay") {
        Some(r#"maxDelay="2000" storable="yes""#)
    } else if STORABLE_TYPES.contains(&type_id)
        || type_id.starts_with("invert")
        || type_id.starts_with("levels")
        || type_id.starts_with("IIR_")
        || type_id.contains("Filter")
        || type_id.contains("toneControl")
    {
        Some(r#"storable="yes""#)
    } else {
        None
    }
}
