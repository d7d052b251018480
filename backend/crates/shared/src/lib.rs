//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed identifiers for store-generated keys
//! - Cross-cutting request validation (message collection)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across the users and courses domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod validation;
