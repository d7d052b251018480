//! Course Error Types
//!
//! Course-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Course-specific result type alias
pub type CourseResult<T> = Result<T, CourseError>;

/// Course-specific error variants
#[derive(Debug, Error)]
pub enum CourseError {
    /// No course with the requested id (or the id was not a number)
    #[error("Course not found")]
    NotFound,

    /// Requester does not own the course
    #[error("Only the course owner can modify this course")]
    NotOwner,

    /// Request body failed field validation
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

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

impl CourseError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CourseError::NotFound => ErrorKind::NotFound,
            CourseError::NotOwner | CourseError::Validation(_) | CourseError::InvalidBody(_) => {
                ErrorKind::BadRequest
            }
            CourseError::Database(_) | CourseError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            CourseError::Validation(errors) => AppError::validation(errors),
            CourseError::Database(e) => AppError::from(e),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            CourseError::Database(e) => {
                tracing::error!(error = %e, "Course database error");
            }
            CourseError::Internal(msg) => {
                tracing::error!(message = %msg, "Course internal error");
            }
            CourseError::NotOwner => {
                tracing::warn!("Course modification by non-owner rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Course error");
            }
        }
    }
}

impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for CourseError {
    fn from(err: AppError) -> Self {
        if err.is_validation() {
            CourseError::Validation(err.errors().to_vec())
        } else {
            CourseError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(CourseError::NotFound.into_app_error().status_code(), 404);
        assert_eq!(CourseError::NotOwner.into_app_error().status_code(), 400);
        assert_eq!(
            CourseError::Validation(vec!["please put a title.".to_string()])
                .into_app_error()
                .status_code(),
            400
        );
        assert_eq!(
            CourseError::Internal("boom".to_string())
                .into_app_error()
                .status_code(),
            500
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(CourseError::NotFound.into_app_error().message(), "Course not found");
        assert_eq!(
            CourseError::NotOwner.into_app_error().message(),
            "Only the course owner can modify this course"
        );
    }

    #[test]
    fn test_validation_from_app_error() {
        let err = CourseError::from(AppError::validation(vec!["please put a title.".to_string()]));
        assert!(matches!(err, CourseError::Validation(ref e) if e == &["please put a title."]));
    }
}
