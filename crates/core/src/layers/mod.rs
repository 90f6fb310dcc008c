//! Income layers and spending allocation module.

mod layers_model;
mod layers_service;
mod layers_traits;

// Re-export the public interface
pub use layers_model::*;
pub use layers_service::{LayersService, LayersServiceTrait};
pub use layers_traits::LayersRepositoryTrait;
