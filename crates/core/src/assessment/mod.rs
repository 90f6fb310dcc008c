//! Self-assessment module - plan configuration, scoring, and step flow.

mod assessment_model;
mod assessment_service;
mod assessment_traits;

// Re-export the public interface
pub use assessment_model::*;
pub use assessment_service::{AssessmentProgress, AssessmentService, AssessmentServiceTrait};
pub use assessment_traits::AssessmentRepositoryTrait;
