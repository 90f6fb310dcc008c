//! SQLite storage implementation for income layers and spending allocations.

mod model;
mod repository;

pub use model::{IncomeLayerDB, SpendingAllocationDB};
pub use repository::LayersRepository;
