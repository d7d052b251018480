//! Courses Router

use std::sync::Arc;

use auth::{AuthConfig, AuthGateState, PgUserRepository, UserRepository, require_basic_auth};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{post, put},
};

use crate::domain::repository::CourseRepository;
use crate::infra::postgres::PgCourseRepository;
use crate::presentation::handlers::{self, CoursesAppState};

/// Create the courses router with PostgreSQL repositories
pub fn courses_router(
    courses: PgCourseRepository,
    users: PgUserRepository,
    config: AuthConfig,
) -> Router {
    courses_router_generic(courses, users, config)
}

/// Create a generic courses router for any repository implementations
///
/// Reads are public; writes pass through the Basic auth gate, which looks
/// requesters up in `users`.
pub fn courses_router_generic<C, U>(courses: C, users: U, config: AuthConfig) -> Router
where
    C: CourseRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthGateState::new(Arc::new(users), Arc::new(config));
    let state = CoursesAppState {
        repo: Arc::new(courses),
    };

    // `route_layer` only wraps the methods registered before it.
    Router::new()
        .route(
            "/courses",
            post(handlers::create_course::<C>)
                .route_layer(from_fn_with_state(gate.clone(), require_basic_auth::<U>))
                .get(handlers::list_courses::<C>),
        )
        .route(
            "/courses/{id}",
            put(handlers::update_course::<C>)
                .delete(handlers::delete_course::<C>)
                .route_layer(from_fn_with_state(gate, require_basic_auth::<U>))
                .get(handlers::get_course::<C>),
        )
        .with_state(state)
}
