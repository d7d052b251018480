//! Read-only course use cases

use std::sync::Arc;

use kernel::id::CourseId;

use crate::domain::entity::CourseWithOwner;
use crate::domain::repository::CourseRepository;
use crate::error::{CourseError, CourseResult};

/// List courses use case
pub struct ListCoursesUseCase<C>
where
    C: CourseRepository,
{
    course_repo: Arc<C>,
}

impl<C> ListCoursesUseCase<C>
where
    C: CourseRepository,
{
    pub fn new(course_repo: Arc<C>) -> Self {
        Self { course_repo }
    }

    pub async fn execute(&self) -> CourseResult<Vec<CourseWithOwner>> {
        self.course_repo.find_all().await
    }
}

/// Get course use case
pub struct GetCourseUseCase<C>
where
    C: CourseRepository,
{
    course_repo: Arc<C>,
}

impl<C> GetCourseUseCase<C>
where
    C: CourseRepository,
{
    pub fn new(course_repo: Arc<C>) -> Self {
        Self { course_repo }
    }

    pub async fn execute(&self, course_id: CourseId) -> CourseResult<CourseWithOwner> {
        self.course_repo
            .find_by_id(course_id)
            .await?
            .ok_or(CourseError::NotFound)
    }
}
