//! In-memory implementation of CourseRepository
//!
//! Joins owners through a shared [`InMemoryUserRepository`], matching the
//! PostgreSQL projection.

use std::collections::BTreeMap;
use std::sync::Arc;

use auth::InMemoryUserRepository;
use chrono::Utc;
use kernel::id::{CourseId, UserId};
use parking_lot::RwLock;

use crate::domain::entity::{Course, CourseFields, CourseWithOwner, NewCourse};
use crate::domain::repository::CourseRepository;
use crate::error::{CourseError, CourseResult};

#[derive(Default)]
struct CourseTable {
    rows: BTreeMap<CourseId, Course>,
    next_id: i64,
}

/// In-memory course store; clones share the same table
#[derive(Clone)]
pub struct InMemoryCourseRepository {
    table: Arc<RwLock<CourseTable>>,
    users: InMemoryUserRepository,
}

impl InMemoryCourseRepository {
    pub fn new(users: InMemoryUserRepository) -> Self {
        Self {
            table: Arc::default(),
            users,
        }
    }

    /// Number of stored courses
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored course without owner join
    pub fn get(&self, course_id: CourseId) -> Option<Course> {
        self.table.read().rows.get(&course_id).cloned()
    }

    /// Inner join on users; courses whose owner vanished are skipped
    fn with_owner(&self, course: Course) -> Option<CourseWithOwner> {
        let owner = self.users.profile(course.user_id)?;
        Some(CourseWithOwner { course, owner })
    }
}

impl CourseRepository for InMemoryCourseRepository {
    async fn find_all(&self) -> CourseResult<Vec<CourseWithOwner>> {
        let courses: Vec<Course> = self.table.read().rows.values().cloned().collect();
        Ok(courses
            .into_iter()
            .filter_map(|c| self.with_owner(c))
            .collect())
    }

    async fn find_by_id(&self, course_id: CourseId) -> CourseResult<Option<CourseWithOwner>> {
        Ok(self.get(course_id).and_then(|c| self.with_owner(c)))
    }

    async fn create(&self, course: &NewCourse) -> CourseResult<Course> {
        if self.users.profile(course.user_id).is_none() {
            return Err(CourseError::Internal(format!(
                "owner {} does not exist",
                course.user_id
            )));
        }

        let mut table = self.table.write();
        table.next_id += 1;

        let now = Utc::now();
        let stored = Course {
            course_id: CourseId::from_raw(table.next_id),
            title: course.fields.title.clone(),
            description: course.fields.description.clone(),
            estimated_time: course.fields.estimated_time.clone(),
            materials_needed: course.fields.materials_needed.clone(),
            user_id: course.user_id,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(stored.course_id, stored.clone());

        Ok(stored)
    }

    async fn update_owned(
        &self,
        course_id: CourseId,
        owner: UserId,
        fields: &CourseFields,
    ) -> CourseResult<u64> {
        let mut table = self.table.write();
        let Some(course) = table
            .rows
            .get_mut(&course_id)
            .filter(|c| c.is_owned_by(owner))
        else {
            return Ok(0);
        };

        course.title = fields.title.clone();
        course.description = fields.description.clone();
        course.estimated_time = fields.estimated_time.clone();
        course.materials_needed = fields.materials_needed.clone();
        course.updated_at = Utc::now();

        Ok(1)
    }

    async fn delete_owned(&self, course_id: CourseId, owner: UserId) -> CourseResult<u64> {
        let mut table = self.table.write();
        let owned = table
            .rows
            .get(&course_id)
            .is_some_and(|c| c.is_owned_by(owner));
        if !owned {
            return Ok(0);
        }

        table.rows.remove(&course_id);
        Ok(1)
    }
}
