use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use primekit_core::users::{Subscriber, SubscriberRepositoryTrait, User, UsersRepositoryTrait};
use primekit_core::Result;

use super::model::{SubscriberDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{subscribers, users};

pub struct UsersRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UsersRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UsersRepository { pool, writer }
    }
}

#[async_trait]
impl UsersRepositoryTrait for UsersRepository {
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .filter(users::email.eq(email))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }

    async fn insert(&self, user: User) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let user_db = UserDB::from(&user);
                diesel::insert_into(users::table)
                    .values(&user_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(user)
            })
            .await
    }
}

pub struct SubscriberRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SubscriberRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SubscriberRepository { pool, writer }
    }
}

#[async_trait]
impl SubscriberRepositoryTrait for SubscriberRepository {
    fn find_by_email(&self, email: &str) -> Result<Option<Subscriber>> {
        let mut conn = get_connection(&self.pool)?;
        let subscriber_db = subscribers::table
            .filter(subscribers::email.eq(email))
            .first::<SubscriberDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(subscriber_db.map(Subscriber::from))
    }

    async fn insert(&self, subscriber: Subscriber) -> Result<Subscriber> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Subscriber> {
                let subscriber_db = SubscriberDB::from(&subscriber);
                diesel::insert_into(subscribers::table)
                    .values(&subscriber_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(subscriber)
            })
            .await
    }
}

// ============================================================================
// Tests
// ============================================================================
