pub mod course;

pub use course::{Course, CourseChanges, CourseFields, CourseWithOwner, NewCourse};
