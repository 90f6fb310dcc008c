//! Financial records module - domain models, services, and traits.

mod records_model;
mod records_service;
mod records_traits;

// Re-export the public interface
pub use records_model::*;
pub use records_service::{RecordsService, RecordsServiceTrait};
pub use records_traits::RecordsRepositoryTrait;
