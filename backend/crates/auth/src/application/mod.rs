//! Application Layer
//!
//! Contains use cases and application services.

pub mod authenticate;
pub mod config;
pub mod register_user;

pub use authenticate::AuthenticateUseCase;
pub use config::AuthConfig;
pub use register_user::{RegisterUserInput, RegisterUserOutput, RegisterUserUseCase};
