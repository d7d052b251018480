//! PostgreSQL Repository Implementation

use auth::domain::entity::UserProfile;
use chrono::{DateTime, Utc};
use kernel::id::{CourseId, UserId};
use sqlx::PgPool;

use crate::domain::entity::{Course, CourseFields, CourseWithOwner, NewCourse};
use crate::domain::repository::CourseRepository;
use crate::error::CourseResult;

/// Owner columns are projected explicitly; password and timestamps never leave the users table.
const SELECT_WITH_OWNER: &str = r#"
    SELECT
        c.id,
        c.title,
        c.description,
        c.estimated_time,
        c.materials_needed,
        c.user_id,
        c.created_at,
        c.updated_at,
        u.first_name AS owner_first_name,
        u.last_name AS owner_last_name,
        u.email_address AS owner_email_address
    FROM courses c
    JOIN users u ON u.id = c.user_id
"#;

/// PostgreSQL-backed course repository
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CourseRepository for PgCourseRepository {
    async fn find_all(&self) -> CourseResult<Vec<CourseWithOwner>> {
        let rows = sqlx::query_as::<_, CourseOwnerRow>(&format!(
            "{} ORDER BY c.id",
            SELECT_WITH_OWNER
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseOwnerRow::into_course).collect())
    }

    async fn find_by_id(&self, course_id: CourseId) -> CourseResult<Option<CourseWithOwner>> {
        let row = sqlx::query_as::<_, CourseOwnerRow>(&format!(
            "{} WHERE c.id = $1",
            SELECT_WITH_OWNER
        ))
        .bind(course_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CourseOwnerRow::into_course))
    }

    async fn create(&self, course: &NewCourse) -> CourseResult<Course> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (
                title,
                description,
                estimated_time,
                materials_needed,
                user_id
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id,
                title,
                description,
                estimated_time,
                materials_needed,
                user_id,
                created_at,
                updated_at
            "#,
        )
        .bind(&course.fields.title)
        .bind(&course.fields.description)
        .bind(&course.fields.estimated_time)
        .bind(&course.fields.materials_needed)
        .bind(course.user_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_course())
    }

    async fn update_owned(
        &self,
        course_id: CourseId,
        owner: UserId,
        fields: &CourseFields,
    ) -> CourseResult<u64> {
        let updated = sqlx::query(
            r#"
            UPDATE courses
            SET
                title = $3,
                description = $4,
                estimated_time = $5,
                materials_needed = $6,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(course_id.get())
        .bind(owner.get())
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(&fields.estimated_time)
        .bind(&fields.materials_needed)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }

    async fn delete_owned(&self, course_id: CourseId, owner: UserId) -> CourseResult<u64> {
        let deleted = sqlx::query("DELETE FROM courses WHERE id = $1 AND user_id = $2")
            .bind(course_id.get())
            .bind(owner.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    description: String,
    estimated_time: Option<String>,
    materials_needed: Option<String>,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CourseRow {
    fn into_course(self) -> Course {
        Course {
            course_id: CourseId::from_raw(self.id),
            title: self.title,
            description: self.description,
            estimated_time: self.estimated_time,
            materials_needed: self.materials_needed,
            user_id: UserId::from_raw(self.user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CourseOwnerRow {
    #[sqlx(flatten)]
    course: CourseRow,
    owner_first_name: String,
    owner_last_name: String,
    owner_email_address: String,
}

impl CourseOwnerRow {
    fn into_course(self) -> CourseWithOwner {
        let course = self.course.into_course();
        let owner = UserProfile {
            user_id: course.user_id,
            first_name: self.owner_first_name,
            last_name: self.owner_last_name,
            email_address: self.owner_email_address,
        };

        CourseWithOwner { course, owner }
    }
}
