//! Primekit Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Primekit: financial
//! records, the aggregation engine, the future budget, the wellbeing
//! self-assessment, and the planning calculators. It is database-agnostic
//! and defines traits that are implemented by the `storage-sqlite` crate.

pub mod assessment;
pub mod budget;
pub mod constants;
pub mod errors;
pub mod layers;
pub mod planning;
pub mod records;
pub mod settings;
pub mod spreadsheet;
pub mod summary;
pub mod tracker;
pub mod users;

// Re-export common types from the records and summary modules
pub use records::*;
pub use summary::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
