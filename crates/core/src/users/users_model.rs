//! User account and newsletter subscriber models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, ValidationError};

/// A registered account. `password_hash` is an argon2 PHC string produced
/// by the caller; this crate never sees a plaintext password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Validate and normalise a registration. Emails are stored lowercased
    /// so uniqueness is case-insensitive.
    pub fn from_new(new_user: NewUser) -> Result<User> {
        let name = new_user.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        let email = normalize_email(&new_user.email)?;
        if new_user.password_hash.is_empty() {
            return Err(ValidationError::MissingField("password".to_string()).into());
        }
        Ok(User {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        })
    }
}

/// A newsletter signup. No account required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Subscriber {
    pub fn new(email: &str, name: &str) -> Result<Subscriber> {
        Ok(Subscriber {
            id: Uuid::new_v4().to_string(),
            email: normalize_email(email)?,
            name: name.trim().to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Lowercase and check the rough shape: something, an @, something, a dot
/// somewhere after it.
pub fn normalize_email(raw: &str) -> Result<String> {
    let email = raw.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(
            ValidationError::InvalidInput(format!("Invalid email address: {raw}")).into(),
        );
    }
    Ok(email)
}
