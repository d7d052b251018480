//! Domain Layer

pub mod entity;
pub mod repository;

pub use entity::{Course, CourseChanges, CourseFields, CourseWithOwner, NewCourse};
pub use repository::CourseRepository;
