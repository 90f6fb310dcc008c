//! Summary module - the financial aggregation engine and its service.

pub mod engine;
mod frequency;
mod summary_model;
mod summary_service;

// Re-export the public interface
pub use engine::{
    aggregate, amortize_epics, annualized, breakdown_label, net_position, CategoryAggregate,
    NetPosition,
};
pub use frequency::{annual_factor, Frequency};
pub use summary_model::{sorted_breakdown, BreakdownSlice, CalculatorSummary};
pub use summary_service::{SummaryService, SummaryServiceTrait};
