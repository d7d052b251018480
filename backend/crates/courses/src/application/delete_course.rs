//! Delete Course Use Case

use std::sync::Arc;

use kernel::id::{CourseId, UserId};

use crate::domain::repository::CourseRepository;
use crate::error::{CourseError, CourseResult};

/// Delete course use case
pub struct DeleteCourseUseCase<C>
where
    C: CourseRepository,
{
    course_repo: Arc<C>,
}

impl<C> DeleteCourseUseCase<C>
where
    C: CourseRepository,
{
    pub fn new(course_repo: Arc<C>) -> Self {
        Self { course_repo }
    }

    pub async fn execute(&self, requester: UserId, course_id: CourseId) -> CourseResult<()> {
        let existing = self
            .course_repo
            .find_by_id(course_id)
            .await?
            .ok_or(CourseError::NotFound)?;

        if !existing.course.is_owned_by(requester) {
            return Err(CourseError::NotOwner);
        }

        let removed = self.course_repo.delete_owned(course_id, requester).await?;
        if removed == 0 {
            return Err(CourseError::NotFound);
        }

        tracing::info!(course_id = %course_id, user_id = %requester, "Course deleted");

        Ok(())
    }
}
