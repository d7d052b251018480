//! Courses Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Course entity and repository trait
//! - `application/` - Use cases (list, get, create, update, delete)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Reads are public. Writes require HTTP Basic credentials (see the `auth`
//! crate) and only the owner may update or delete a course.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::repository::CourseRepository;
pub use error::{CourseError, CourseResult};
pub use infra::{InMemoryCourseRepository, PgCourseRepository};
pub use presentation::router::{courses_router, courses_router_generic};
