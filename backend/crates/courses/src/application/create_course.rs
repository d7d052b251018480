//! Create Course Use Case

use std::sync::Arc;

use kernel::id::{CourseId, UserId};

use crate::application::input::CourseInput;
use crate::domain::entity::NewCourse;
use crate::domain::repository::CourseRepository;
use crate::error::CourseResult;

/// Create course use case
pub struct CreateCourseUseCase<C>
where
    C: CourseRepository,
{
    course_repo: Arc<C>,
}

impl<C> CreateCourseUseCase<C>
where
    C: CourseRepository,
{
    pub fn new(course_repo: Arc<C>) -> Self {
        Self { course_repo }
    }

    /// Store a course owned by `owner`
    pub async fn execute(&self, owner: UserId, input: CourseInput) -> CourseResult<CourseId> {
        let fields = input.into_changes()?.into_fields();

        let course = self
            .course_repo
            .create(&NewCourse {
                fields,
                user_id: owner,
            })
            .await?;

        tracing::info!(
            course_id = %course.course_id,
            user_id = %owner,
            "Course created"
        );

        Ok(course.course_id)
    }
}
