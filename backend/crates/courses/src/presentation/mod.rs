//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CoursesAppState;
pub use router::{courses_router, courses_router_generic};
