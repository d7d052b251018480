//! HTTP Basic Credentials
//!
//! Extraction of the `Authorization: Basic <base64(user:pass)>` credential
//! pair from request headers.

use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose};
use thiserror::Error;

use crate::password::ClearTextPassword;

/// Why a Basic credential pair could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("Authorization header not present")]
    Missing,

    #[error("Authorization scheme is not Basic")]
    UnsupportedScheme,

    #[error("Authorization payload is not valid base64 UTF-8")]
    InvalidEncoding,

    #[error("Authorization payload has no ':' separator")]
    MissingSeparator,

    #[error("Password is empty")]
    EmptyPassword,
}

/// Username/password pair from a Basic `Authorization` header
#[derive(Debug)]
pub struct BasicCredentials {
    pub username: String,
    pub password: ClearTextPassword,
}

/// Extract the Basic credential pair from request headers
///
/// The scheme name is matched case-insensitively. The username ends at the
/// first `:`; the password may itself contain colons.
pub fn extract_basic_credentials(headers: &HeaderMap) -> Result<BasicCredentials, CredentialsError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(CredentialsError::Missing)?
        .to_str()
        .map_err(|_| CredentialsError::InvalidEncoding)?;

    let (scheme, payload) = value
        .trim()
        .split_once(' ')
        .ok_or(CredentialsError::UnsupportedScheme)?;

    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(CredentialsError::UnsupportedScheme);
    }

    let decoded = general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|_| CredentialsError::InvalidEncoding)?;
    let decoded = String::from_utf8(decoded).map_err(|_| CredentialsError::InvalidEncoding)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(CredentialsError::MissingSeparator)?;

    let password = ClearTextPassword::new(password.to_string())
        .map_err(|_| CredentialsError::EmptyPassword)?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password,
    })
}

/// Build a Basic `Authorization` header value
///
/// Counterpart of [`extract_basic_credentials`], used by clients and tests.
pub fn basic_authorization_value(username: &str, password: &str) -> String {
    let payload = general_purpose::STANDARD.encode(format!("{}:{}", username, password));
    format!("Basic {}", payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_valid_credentials() {
        let headers = headers_with(&basic_authorization_value("jo@x.com", "secret1"));
        let credentials = extract_basic_credentials(&headers).unwrap();

        assert_eq!(credentials.username, "jo@x.com");
        let hashed = credentials.password.hash(None).unwrap();
        let expected = ClearTextPassword::new("secret1".to_string()).unwrap();
        assert!(hashed.verify(&expected, None));
    }

    #[test]
    fn test_password_may_contain_colons() {
        let headers = headers_with(&basic_authorization_value("jo@x.com", "a:b:c"));
        let credentials = extract_basic_credentials(&headers).unwrap();

        let hashed = credentials.password.hash(None).unwrap();
        let expected = ClearTextPassword::new("a:b:c".to_string()).unwrap();
        assert!(hashed.verify(&expected, None));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let value = basic_authorization_value("jo@x.com", "secret1").replace("Basic", "bAsIc");
        assert!(extract_basic_credentials(&headers_with(&value)).is_ok());
    }

    #[test]
    fn test_missing_header() {
        let result = extract_basic_credentials(&HeaderMap::new());
        assert_eq!(result.unwrap_err(), CredentialsError::Missing);
    }

    #[test]
    fn test_bearer_scheme_rejected() {
        let result = extract_basic_credentials(&headers_with("Bearer abc.def.ghi"));
        assert_eq!(result.unwrap_err(), CredentialsError::UnsupportedScheme);
    }

    #[test]
    fn test_invalid_base64() {
        let result = extract_basic_credentials(&headers_with("Basic ***"));
        assert_eq!(result.unwrap_err(), CredentialsError::InvalidEncoding);
    }

    #[test]
    fn test_missing_separator() {
        let payload = general_purpose::STANDARD.encode("no-colon-here");
        let result = extract_basic_credentials(&headers_with(&format!("Basic {}", payload)));
        assert_eq!(result.unwrap_err(), CredentialsError::MissingSeparator);
    }

    #[test]
    fn test_empty_password() {
        let headers = headers_with(&basic_authorization_value("jo@x.com", ""));
        let result = extract_basic_credentials(&headers);
        assert_eq!(result.unwrap_err(), CredentialsError::EmptyPassword);
    }
}
