//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Email, UserId, UserPassword};

/// Stored user
///
/// The password is only ever held as its hash.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-generated identifier
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Unique (case-insensitively); doubles as the login name
    pub email: Email,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password_hash: UserPassword,
}

impl NewUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Email,
        password_hash: UserPassword,
    ) -> Self {
        Self {
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            email,
            password_hash,
        }
    }
}

/// Public projection of a user: no password, no timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_address: user.email.as_str().to_string(),
        }
    }
}
