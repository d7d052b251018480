//! Request field validation
//!
//! Collects one human-readable message per violated rule, in rule order.
//! Several rules may fail for the same field; each adds its own message.

use crate::error::app_error::{AppError, AppResult};

/// Ordered collector of validation messages
///
/// ```rust
/// use kernel::validation::Validator;
///
/// let title: Option<String> = None;
/// let result = Validator::new()
///     .require(title.as_deref(), "please put a title.")
///     .finish();
///
/// assert_eq!(result.unwrap_err().errors(), ["please put a title."]);
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a present, non-blank value
    pub fn require(self, value: Option<&str>, message: &str) -> Self {
        self.check(is_present(value), message)
    }

    /// Record `message` unless `passed`
    pub fn check(mut self, passed: bool, message: &str) -> Self {
        if !passed {
            self.errors.push(message.to_string());
        }
        self
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// `Ok(())` when every rule passed, otherwise a 400 validation error
    pub fn finish(self) -> AppResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(self.errors))
        }
    }
}

/// Present and non-empty after trimming whitespace
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
