//! Users and Authentication Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases (register, authenticate)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, Basic auth gate, router
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - HTTP Basic credentials checked on every protected request
//! - Email lookups are case-insensitive
//! - Clients only ever see `Access Denied` on authentication failure

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::dto::UserResponse;
pub use presentation::middleware::{AuthGateState, AuthenticatedUser, require_basic_auth};
pub use presentation::router::{users_router, users_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
