//! Register User Use Case
//!
//! Validates the submitted fields and stores a new user with a hashed password.

use std::sync::Arc;

use kernel::validation::Validator;

use crate::application::config::AuthConfig;
use crate::domain::entity::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword, UserId, UserPassword};
use crate::error::{AuthError, AuthResult};

pub const FIRST_NAME_REQUIRED: &str = "please put a first name.";
pub const LAST_NAME_REQUIRED: &str = "please put a last name.";
pub const EMAIL_REQUIRED: &str = "please put an email address.";
pub const EMAIL_INVALID: &str = "please put a valid email address.";
pub const PASSWORD_REQUIRED: &str = "please put a password.";

/// Register user input; every field may be missing from the request body
#[derive(Debug, Default)]
pub struct RegisterUserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub password: Option<String>,
}

impl RegisterUserInput {
    /// Field rules, in reporting order
    pub fn validate(&self) -> AuthResult<()> {
        let email = self.email_address.as_deref();

        Validator::new()
            .require(self.first_name.as_deref(), FIRST_NAME_REQUIRED)
            .require(self.last_name.as_deref(), LAST_NAME_REQUIRED)
            .require(email, EMAIL_REQUIRED)
            .check(
                email.is_some_and(|e| Email::is_valid_format(e.trim())),
                EMAIL_INVALID,
            )
            .require(self.password.as_deref(), PASSWORD_REQUIRED)
            .finish()
            .map_err(AuthError::from)
    }
}

/// Register user output
#[derive(Debug)]
pub struct RegisterUserOutput {
    pub user_id: UserId,
}

/// Register user use case
pub struct RegisterUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> AuthResult<RegisterUserOutput> {
        input.validate()?;

        let (Some(first_name), Some(last_name), Some(email), Some(password)) = (
            input.first_name,
            input.last_name,
            input.email_address,
            input.password,
        ) else {
            return Err(AuthError::Internal(
                "validated input is missing a field".to_string(),
            ));
        };

        let email = Email::new(email)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let raw_password = RawPassword::new(password)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = self
            .user_repo
            .create(&NewUser::new(first_name, last_name, email, password_hash))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterUserOutput {
            user_id: user.user_id,
        })
    }
}
