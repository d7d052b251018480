//! Application Layer
//!
//! Course use cases.

pub mod create_course;
pub mod delete_course;
pub mod input;
pub mod queries;
pub mod update_course;

pub use create_course::CreateCourseUseCase;
pub use delete_course::DeleteCourseUseCase;
pub use input::CourseInput;
pub use queries::{GetCourseUseCase, ListCoursesUseCase};
pub use update_course::UpdateCourseUseCase;
