//! Authenticate Use Case
//!
//! Resolves a Basic credential pair to a stored user.

use std::sync::Arc;

use platform::basic_auth::BasicCredentials;

use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Look the user up by canonical email and verify the password
    ///
    /// A username that is not an email cannot match anyone, so it is
    /// reported the same way as an unknown user.
    pub async fn execute(&self, credentials: BasicCredentials) -> AuthResult<User> {
        let BasicCredentials { username, password } = credentials;

        let Ok(email) = Email::new(&username) else {
            return Err(AuthError::UserNotFound);
        };

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let password = RawPassword::from(password);
        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::AuthenticationFailure);
        }

        tracing::debug!(user_id = %user.user_id, "User authenticated");

        Ok(user)
    }
}
