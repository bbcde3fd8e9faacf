use super::*;

use std::io::Write;

use crate::profile::presets::Card;

#[test]
fn test_missing_file_yields_defaults() {
    let config = AppConfig::load_from(Path::new("no-such-paramscan.toml")).expect("defaults");

    assert!(config.profile.card.is_none());
    assert!(config.profile.version.is_none());
    assert!(config.output.directory.is_none());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("paramscan.toml");
    let mut file = fs::File::create(&path).expect("create config");
    writeln!(file, "[profile]\ncard = \"dacdsp\"").expect("write config");

    let config = AppConfig::load_from(&path).expect("load config");

    assert_eq!(config.profile.card, Some(Card::Dacdsp));
    assert!(config.profile.version.is_none());
    assert!(config.output.directory.is_none());
}

#[test]
fn test_invalid_card_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("paramscan.toml");
    fs::write(&path, "[profile]\ncard = \"unknown\"\n").expect("write config");

    assert!(AppConfig::load_from(&path).is_err());
}

#[test]
fn test_resolve_output_prepends_directory_for_relative_paths() {
    let config = AppConfig {
        output: OutputSection {
            directory: Some(PathBuf::from("exports")),
        },
        ..AppConfig::default()
    };

    assert_eq!(
        config.resolve_output(Path::new("params.csv")),
        PathBuf::from("exports/params.csv")
    );
    assert_eq!(
        config.resolve_output(Path::new("/tmp/params.csv")),
        PathBuf::from("/tmp/params.csv")
    );
}
