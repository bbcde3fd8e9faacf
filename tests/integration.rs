// Aggregator test: include tests from tests/rust/* as distinct modules.
// This keeps sources organized while providing a single integration test
// file that Cargo will compile and run.

mod rust_tests {
    pub mod cli_help {
        include!("rust/cli_help.rs");
    }
    pub mod cli_conflicting_modes {
        include!("rust/cli_conflicting_modes.rs");
    }
    pub mod cli_empty_input {
        include!("rust/cli_empty_input.rs");
    }
    pub mod cli_table_export {
        include!("rust/cli_table_export.rs");
    }
    pub mod cli_profile_metadata {
        include!("rust/cli_profile_metadata.rs");
    }
}

// Re-export tests so the test runner finds them at crate root.
pub use rust_tests::*;
