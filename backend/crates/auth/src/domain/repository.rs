//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::{NewUser, User};
use crate::domain::value_object::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user, returning it with its store-generated id
    ///
    /// Fails with `AuthError::EmailTaken` when the canonical email exists.
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by canonical email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if a canonical email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
