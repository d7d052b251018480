//! Auth Middleware
//!
//! HTTP Basic authentication gate for protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::basic_auth::extract_basic_credentials;

use crate::application::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::UserProfile;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::AuthError;

/// Identity attached to requests that passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<UserProfile> for AuthenticatedUser {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.user_id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email_address: profile.email_address,
        }
    }
}

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }
}

/// Middleware that requires valid Basic credentials
///
/// On success the request carries an [`AuthenticatedUser`] extension.
/// Every failure answers 401 `Access Denied`; the reason is logged.
pub async fn require_basic_auth<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let credentials = extract_basic_credentials(req.headers())?;

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(credentials).await?;

    req.extensions_mut()
        .insert(AuthenticatedUser::from(UserProfile::from(&user)));

    Ok(next.run(req).await)
}
