pub mod aggregate;
pub mod blocks;
pub mod extract;
pub mod store;

pub use aggregate::{CellAggregate, cell_aggregates};
pub use store::{ParameterRecord, ParameterStore};
