use async_trait::async_trait;

use crate::errors::Result;
use crate::users::{Subscriber, User};

#[async_trait]
pub trait UsersRepositoryTrait: Send + Sync {
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn insert(&self, user: User) -> Result<User>;
}

#[async_trait]
pub trait SubscriberRepositoryTrait: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>>;
    async fn insert(&self, subscriber: Subscriber) -> Result<Subscriber>;
}
