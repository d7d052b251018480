//! In-memory implementation of UserRepository
//!
//! Used by HTTP tests and local experiments. Mirrors the PostgreSQL
//! semantics: sequential ids and a unique canonical email.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::entity::{NewUser, User, UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct UserTable {
    rows: BTreeMap<UserId, User>,
    next_id: i64,
}

/// In-memory user store; clones share the same table
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owner projection for joins performed by other in-memory stores
    pub fn profile(&self, user_id: UserId) -> Option<UserProfile> {
        self.table.read().rows.get(&user_id).map(UserProfile::from)
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut table = self.table.write();

        if table
            .rows
            .values()
            .any(|u| u.email.canonical() == user.email.canonical())
        {
            return Err(AuthError::EmailTaken);
        }

        table.next_id += 1;
        let now = Utc::now();
        let stored = User {
            user_id: UserId::from_raw(table.next_id),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(stored.user_id, stored.clone());

        Ok(stored)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .find(|u| u.email.canonical() == email.canonical())
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{RawPassword, UserPassword};

    fn new_user(email: &str) -> NewUser {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        NewUser::new(
            "Jo",
            "Do",
            Email::new(email).unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create(&new_user("a@x.com")).await.unwrap();
        let second = repo.create(&new_user("b@x.com")).await.unwrap();

        assert_eq!(first.user_id.get(), 1);
        assert_eq!(second.user_id.get(), 2);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_canonical_email_is_unique() {
        let repo = InMemoryUserRepository::new();
        repo.create(&new_user("jo@x.com")).await.unwrap();

        let err = repo.create(&new_user("JO@X.COM")).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_email_ignores_case() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(&new_user("Jo@X.com")).await.unwrap();

        let found = repo
            .find_by_email(&Email::new("jo@x.COM").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user_id, created.user_id);
        assert_eq!(found.email.as_str(), "Jo@X.com");

        let profile = repo.profile(created.user_id).unwrap();
        assert_eq!(profile.email_address, "Jo@X.com");
    }
}
