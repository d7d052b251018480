//! HTTP Handlers

use std::sync::Arc;

use auth::AuthenticatedUser;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::id::CourseId;

use crate::application::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase, ListCoursesUseCase,
    UpdateCourseUseCase,
};
use crate::domain::repository::CourseRepository;
use crate::error::{CourseError, CourseResult};
use crate::presentation::dto::{CourseRequest, CourseResponse};

/// Shared state for course handlers
#[derive(Clone)]
pub struct CoursesAppState<C>
where
    C: CourseRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<C>,
}

/// A path id that is not a number names no course
fn course_id(path: Result<Path<i64>, PathRejection>) -> CourseResult<CourseId> {
    path.map(|Path(id)| CourseId::from_raw(id))
        .map_err(|_| CourseError::NotFound)
}

fn course_body(body: Result<Json<CourseRequest>, JsonRejection>) -> CourseResult<CourseRequest> {
    body.map(|Json(req)| req)
        .map_err(|e| CourseError::InvalidBody(e.body_text()))
}

// ============================================================================
// Queries
// ============================================================================

/// GET /api/courses
pub async fn list_courses<C>(
    State(state): State<CoursesAppState<C>>,
) -> CourseResult<Json<Vec<CourseResponse>>>
where
    C: CourseRepository + Clone + Send + Sync + 'static,
{
    let courses = ListCoursesUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// GET /api/courses/{id}
pub async fn get_course<C>(
    State(state): State<CoursesAppState<C>>,
    path: Result<Path<i64>, PathRejection>,
) -> CourseResult<Json<CourseResponse>>
where
    C: CourseRepository + Clone + Send + Sync + 'static,
{
    let course_id = course_id(path)?;
    let course = GetCourseUseCase::new(state.repo.clone())
        .execute(course_id)
        .await?;

    Ok(Json(course.into()))
}

// ============================================================================
// Mutations
// ============================================================================

/// POST /api/courses
pub async fn create_course<C>(
    State(state): State<CoursesAppState<C>>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Result<Json<CourseRequest>, JsonRejection>,
) -> CourseResult<impl IntoResponse>
where
    C: CourseRepository + Clone + Send + Sync + 'static,
{
    let req = course_body(body)?;

    let course_id = CreateCourseUseCase::new(state.repo.clone())
        .execute(user.id, req.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/courses/{}", course_id))],
    ))
}

/// PUT /api/courses/{id}
pub async fn update_course<C>(
    State(state): State<CoursesAppState<C>>,
    Extension(user): Extension<AuthenticatedUser>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<CourseRequest>, JsonRejection>,
) -> CourseResult<StatusCode>
where
    C: CourseRepository + Clone + Send + Sync + 'static,
{
    let course_id = course_id(path)?;
    let req = course_body(body)?;

    UpdateCourseUseCase::new(state.repo.clone())
        .execute(user.id, course_id, req.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/courses/{id}
pub async fn delete_course<C>(
    State(state): State<CoursesAppState<C>>,
    Extension(user): Extension<AuthenticatedUser>,
    path: Result<Path<i64>, PathRejection>,
) -> CourseResult<StatusCode>
where
    C: CourseRepository + Clone + Send + Sync + 'static,
{
    let course_id = course_id(path)?;

    DeleteCourseUseCase::new(state.repo.clone())
        .execute(user.id, course_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
