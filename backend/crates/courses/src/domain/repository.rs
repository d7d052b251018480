//! Repository Traits

use kernel::id::{CourseId, UserId};

use crate::domain::entity::{Course, CourseFields, CourseWithOwner, NewCourse};
use crate::error::CourseResult;

/// Course repository trait
#[trait_variant::make(CourseRepository: Send)]
pub trait LocalCourseRepository {
    /// All courses with owners, ordered by id
    async fn find_all(&self) -> CourseResult<Vec<CourseWithOwner>>;

    /// One course with its owner
    async fn find_by_id(&self, course_id: CourseId) -> CourseResult<Option<CourseWithOwner>>;

    /// Insert a course, returning it with its store-generated id
    async fn create(&self, course: &NewCourse) -> CourseResult<Course>;

    /// Overwrite a course only if `owner` still owns it
    ///
    /// Returns the number of rows written (0 or 1).
    async fn update_owned(
        &self,
        course_id: CourseId,
        owner: UserId,
        fields: &CourseFields,
    ) -> CourseResult<u64>;

    /// Delete a course only if `owner` still owns it
    ///
    /// Returns the number of rows removed (0 or 1).
    async fn delete_owned(&self, course_id: CourseId, owner: UserId) -> CourseResult<u64>;
}
