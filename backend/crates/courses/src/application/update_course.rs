//! Update Course Use Case

use std::sync::Arc;

use kernel::id::{CourseId, UserId};

use crate::application::input::CourseInput;
use crate::domain::repository::CourseRepository;
use crate::error::{CourseError, CourseResult};

/// Update course use case
pub struct UpdateCourseUseCase<C>
where
    C: CourseRepository,
{
    course_repo: Arc<C>,
}

impl<C> UpdateCourseUseCase<C>
where
    C: CourseRepository,
{
    pub fn new(course_repo: Arc<C>) -> Self {
        Self { course_repo }
    }

    /// Validate, check existence and ownership, then write
    pub async fn execute(
        &self,
        requester: UserId,
        course_id: CourseId,
        input: CourseInput,
    ) -> CourseResult<()> {
        let changes = input.into_changes()?;

        let existing = self
            .course_repo
            .find_by_id(course_id)
            .await?
            .ok_or(CourseError::NotFound)?;

        if !existing.course.is_owned_by(requester) {
            return Err(CourseError::NotOwner);
        }

        let fields = changes.merged_over(&existing.course);

        // Guarded write; zero rows means the course went away after the read
        let written = self
            .course_repo
            .update_owned(course_id, requester, &fields)
            .await?;
        if written == 0 {
            return Err(CourseError::NotFound);
        }

        tracing::info!(course_id = %course_id, user_id = %requester, "Course updated");

        Ok(())
    }
}
