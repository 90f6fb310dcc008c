mod tracker_model;
mod tracker_service;
mod tracker_traits;

pub use tracker_model::{NetWorthSnapshot, SnapshotInput, TrackerStatus};
pub use tracker_service::{TrackerService, TrackerServiceTrait};
pub use tracker_traits::TrackerRepositoryTrait;
