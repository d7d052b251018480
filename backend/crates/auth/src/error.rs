//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::basic_auth::CredentialsError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message shown to clients for every authentication failure
pub const ACCESS_DENIED: &str = "Access Denied";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Authorization header absent or unparseable
    #[error("Auth header not found")]
    MissingCredentials(#[source] CredentialsError),

    /// No user with the given email
    #[error("user not found")]
    UserNotFound,

    /// Password did not verify
    #[error("authentication failure")]
    AuthenticationFailure,

    /// Request body failed field validation
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Canonical email already registered
    #[error("The email address is already in use.")]
    EmailTaken,

    /// Request body was not valid JSON for the endpoint
    #[error("{0}")]
    InvalidBody(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials(_)
            | AuthError::UserNotFound
            | AuthError::AuthenticationFailure => ErrorKind::Unauthorized,
            AuthError::Validation(_) | AuthError::EmailTaken | AuthError::InvalidBody(_) => {
                ErrorKind::BadRequest
            }
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Gate failures collapse to a single opaque message; the reason only
    /// reaches the log.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::MissingCredentials(_)
            | AuthError::UserNotFound
            | AuthError::AuthenticationFailure => AppError::unauthorized(ACCESS_DENIED),
            AuthError::Validation(errors) => AppError::validation(errors),
            AuthError::EmailTaken => AppError::validation(vec![self.to_string()]),
            AuthError::Database(e) => AppError::from(e),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::MissingCredentials(cause) => {
                tracing::warn!(reason = %self, cause = %cause, "Access denied");
            }
            AuthError::UserNotFound | AuthError::AuthenticationFailure => {
                tracing::warn!(reason = %self, "Access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_validation() {
            AuthError::Validation(err.errors().to_vec())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

impl From<CredentialsError> for AuthError {
    fn from(err: CredentialsError) -> Self {
        AuthError::MissingCredentials(err)
    }
}
