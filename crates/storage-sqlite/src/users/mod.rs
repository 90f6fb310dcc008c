//! SQLite storage implementation for users and subscribers.

mod model;
mod repository;

pub use model::{SubscriberDB, UserDB};
pub use repository::{SubscriberRepository, UsersRepository};
