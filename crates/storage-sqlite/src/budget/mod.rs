//! SQLite storage implementation for future budget phases.

mod model;
mod repository;

pub use model::FutureBudgetPhaseDB;
pub use repository::BudgetRepository;
