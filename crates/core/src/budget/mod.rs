//! Future budget module - domain models, services, and traits.

mod budget_model;
mod budget_service;
mod budget_traits;

// Re-export the public interface
pub use budget_model::*;
pub use budget_service::{BudgetService, BudgetServiceTrait};
pub use budget_traits::BudgetRepositoryTrait;
