//! HTTP Handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::application::config::AuthConfig;
use crate::application::{RegisterUserInput, RegisterUserUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{CreateUserRequest, UserResponse};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for user handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/users
pub async fn get_current_user(Extension(user): Extension<AuthenticatedUser>) -> Json<UserResponse> {
    Json(UserResponse {
        first_name: user.first_name,
        last_name: user.last_name,
        email_address: user.email_address,
    })
}

// ============================================================================
// Create User
// ============================================================================

/// POST /api/users
pub async fn create_user<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body.map_err(|e| AuthError::InvalidBody(e.body_text()))?;

    let use_case = RegisterUserUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterUserInput {
        first_name: req.first_name,
        last_name: req.last_name,
        email_address: req.email_address,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok((StatusCode::CREATED, [(header::LOCATION, "/")]))
}
