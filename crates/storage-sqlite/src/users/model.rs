//! Database models for users and subscribers.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use primekit_core::users::{Subscriber, User};

use crate::utils::{format_timestamp, parse_timestamp};

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::subscribers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SubscriberDB {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: String,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            created_at: parse_timestamp(&db.created_at, "users.created_at"),
            id: db.id,
            name: db.name,
            email: db.email,
            password_hash: db.password_hash,
        }
    }
}

impl From<&User> for UserDB {
    fn from(domain: &User) -> Self {
        Self {
            id: domain.id.clone(),
            name: domain.name.clone(),
            email: domain.email.clone(),
            password_hash: domain.password_hash.clone(),
            created_at: format_timestamp(&domain.created_at),
        }
    }
}

impl From<SubscriberDB> for Subscriber {
    fn from(db: SubscriberDB) -> Self {
        Self {
            created_at: parse_timestamp(&db.created_at, "subscribers.created_at"),
            id: db.id,
            email: db.email,
            name: db.name,
        }
    }
}

impl From<&Subscriber> for SubscriberDB {
    fn from(domain: &Subscriber) -> Self {
        Self {
            id: domain.id.clone(),
            email: domain.email.clone(),
            name: domain.name.clone(),
            created_at: format_timestamp(&domain.created_at),
        }
    }
}
