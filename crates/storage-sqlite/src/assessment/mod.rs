//! SQLite storage implementation for wellbeing assessments.

mod model;
mod repository;

pub use model::AssessmentDB;
pub use repository::AssessmentRepository;
