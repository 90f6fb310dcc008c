//! Account and newsletter services.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::{DatabaseError, Result};
use crate::users::{NewUser, Subscriber, SubscriberRepositoryTrait, User, UsersRepositoryTrait};

#[async_trait]
pub trait UsersServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn register(&self, new_user: NewUser) -> Result<User>;
}

pub struct UsersService {
    repository: Arc<dyn UsersRepositoryTrait>,
}

impl UsersService {
    pub fn new(repository: Arc<dyn UsersRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersServiceTrait for UsersService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.find_by_id(user_id)?.ok_or_else(|| {
            DatabaseError::NotFound(format!("User not found: {user_id}")).into()
        })
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(&email.trim().to_lowercase())
    }

    async fn register(&self, new_user: NewUser) -> Result<User> {
        let user = User::from_new(new_user)?;
        if self.repository.find_by_email(&user.email)?.is_some() {
            return Err(DatabaseError::UniqueViolation(
                "An account with this email already exists".to_string(),
            )
            .into());
        }
        info!("Registering new user {}", user.email);
        self.repository.insert(user).await
    }
}

#[async_trait]
pub trait SubscriberServiceTrait: Send + Sync {
    async fn subscribe(&self, email: &str, name: &str) -> Result<Subscriber>;
}

pub struct SubscriberService {
    repository: Arc<dyn SubscriberRepositoryTrait>,
}

impl SubscriberService {
    pub fn new(repository: Arc<dyn SubscriberRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SubscriberServiceTrait for SubscriberService {
    /// Signing up twice is not an error; the existing row is returned.
    async fn subscribe(&self, email: &str, name: &str) -> Result<Subscriber> {
        let subscriber = Subscriber::new(email, name)?;
        if let Some(existing) = self.repository.find_by_email(&subscriber.email)? {
            debug!("Subscriber {} already on the list", existing.email);
            return Ok(existing);
        }
        self.repository.insert(subscriber).await
    }
}
