//! Email Value Object
//!
//! A syntactically valid email address. The submitted spelling is kept for
//! display; a lowercase canonical form is used for uniqueness and login lookup.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    original: String,
    canonical: String,
}

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> AppResult<Self> {
        let original = email.as_ref().trim();

        if original.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        if !Self::is_valid_format(original) {
            return Err(AppError::bad_request("Invalid email format"));
        }

        Ok(Self {
            original: original.to_string(),
            canonical: original.to_lowercase(),
        })
    }

    /// Syntactic email check
    ///
    /// One `@`, a non-empty local part without whitespace, and a dotted
    /// domain made of alphanumerics, dots and hyphens.
    pub fn is_valid_format(email: &str) -> bool {
        if email.len() > EMAIL_MAX_LENGTH {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
            return false;
        }
        if local.chars().any(|c| c.is_whitespace() || c == '@') {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }
        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
            return false;
        }
        if domain.contains("..") {
            return false;
        }

        true
    }

    /// Restore from database columns (assumed already validated)
    pub fn from_db(original: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            canonical: canonical.into(),
        }
    }

    /// The address as submitted (trimmed)
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Lowercase form used for lookups
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("jo@x.com").is_ok());
        assert!(Email::new("User@Example.COM").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("   ").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@.example.com").is_err());
        assert!(Email::new("user@example..com").is_err());
        assert!(Email::new("us er@example.com").is_err());
    }

    #[test]
    fn test_email_keeps_spelling_and_canonicalizes() {
        let email = Email::new("  Jo.Do@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "Jo.Do@Example.COM");
        assert_eq!(email.canonical(), "jo.do@example.com");
    }

    #[test]
    fn test_email_too_long() {
        let local = "a".repeat(LOCAL_PART_MAX_LENGTH + 1);
        assert!(Email::new(format!("{}@example.com", local)).is_err());
    }
}
