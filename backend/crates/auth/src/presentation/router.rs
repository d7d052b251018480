//! Users Router

use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGateState, require_basic_auth};

/// Create the users router with PostgreSQL repository
pub fn users_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    users_router_generic(repo, config)
}

/// Create a generic users router for any repository implementation
///
/// `GET /users` sits behind the Basic auth gate; `POST /users` is open.
pub fn users_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    let config = Arc::new(config);

    let gate = AuthGateState::new(repo.clone(), config.clone());
    let state = AuthAppState { repo, config };

    Router::new()
        .route(
            "/users",
            get(handlers::get_current_user)
                .route_layer(from_fn_with_state(gate, require_basic_auth::<R>))
                .post(handlers::create_user::<R>),
        )
        .with_state(state)
}
