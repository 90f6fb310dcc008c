//! SQLite storage implementation for the planning calculators.

mod model;
mod repository;

pub use model::{DebtRowDB, EnoughEstimateDB, LifeExpectancyEstimateDB};
pub use repository::PlanningRepository;
