//! SQLite storage implementation for net worth snapshots and data reset.

mod model;
mod repository;

pub use model::NetWorthSnapshotDB;
pub use repository::TrackerRepository;
