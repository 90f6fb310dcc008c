//! Per-user settings module.

mod settings_service;
mod settings_traits;

pub use settings_service::{UserSettingsService, UserSettingsServiceTrait};
pub use settings_traits::UserSettingsRepositoryTrait;
