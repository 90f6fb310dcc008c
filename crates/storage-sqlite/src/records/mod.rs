//! SQLite storage implementation for the calculator record tables.

mod model;
mod repository;

pub use model::{
    AssetDB, EpicExperienceDB, ExpenseItemDB, IncomeSourceDB, LiabilityDB, SubscriptionDB,
};
pub use repository::RecordsRepository;
