mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{normalize_email, NewUser, Subscriber, User};
pub use users_service::{
    SubscriberService, SubscriberServiceTrait, UsersService, UsersServiceTrait,
};
pub use users_traits::{SubscriberRepositoryTrait, UsersRepositoryTrait};
