use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for one parse-then-export run.
///
/// Malformed blocks are not represented here: they are dropped during
/// extraction and only surface as a lower record count. Unresolvable
/// catalogue entries render as comments in the profile document.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read input file {}: {source}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no parameters found in {}", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("--address-lists and --address-range cannot be combined")]
    ConflictingModes,

    #[error("cannot write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
