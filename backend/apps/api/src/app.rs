//! Router composition
//!
//! Each domain crate builds its own router; the merged result is nested
//! under `/api` next to the welcome route and the JSON 404 fallback.

use axum::{
    Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Full application router
pub fn build_router(api: Router, allowed_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .expose_headers([header::LOCATION])
        .allow_credentials(true);

    Router::new()
        .route("/", get(welcome))
        .nest("/api", api)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn welcome() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the REST API project!" }))
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route Not Found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::{AuthConfig, InMemoryUserRepository, users_router_generic};
    use axum::body::Body;
    use axum::http::Request;
    use courses::{InMemoryCourseRepository, courses_router_generic};
    use http_body_util::BodyExt;
    use platform::basic_auth::basic_authorization_value;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let users = InMemoryUserRepository::new();
        let courses = InMemoryCourseRepository::new(users.clone());
        let config = AuthConfig::default();
        let api = Router::new()
            .merge(users_router_generic(users.clone(), config.clone()))
            .merge(courses_router_generic(courses, users, config));

        build_router(
            api,
            vec![HeaderValue::from_static("http://localhost:3000")],
        )
    }

    fn request(
        method: &str,
        uri: &str,
        login: Option<(&str, &str)>,
        body: Option<Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some((user, password)) = login {
            builder = builder.header(
                header::AUTHORIZATION,
                basic_authorization_value(user, password),
            );
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_welcome() {
        let response = test_app()
            .oneshot(request("GET", "/", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"message": "Welcome to the REST API project!"})
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = test_app()
            .oneshot(request("GET", "/api/nothing-here", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!({"message": "Route Not Found"}));
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/courses")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_user_and_course_lifecycle() {
        let app = test_app();
        let jo = Some(("jo@x.com", "secret1"));

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/users",
                None,
                Some(json!({
                    "firstName": "Jo",
                    "lastName": "Do",
                    "emailAddress": "jo@x.com",
                    "password": "secret1"
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let response = app
            .clone()
            .oneshot(request("GET", "/api/users", jo, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"firstName": "Jo", "lastName": "Do", "emailAddress": "jo@x.com"})
        );

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/courses",
                jo,
                Some(json!({"description": "No title here"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"errors": ["please put a title."]})
        );

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/courses",
                jo,
                Some(json!({"title": "Intro", "description": "Basics"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/courses/1");

        let response = app
            .clone()
            .oneshot(request("GET", "/api/courses", None, None))
            .await
            .unwrap();
        let courses = json_body(response).await;
        assert_eq!(courses[0]["user"]["emailAddress"], "jo@x.com");
        assert!(courses[0]["user"].get("password").is_none());

        let response = app
            .clone()
            .oneshot(request("DELETE", "/api/courses/1", jo, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(request("GET", "/api/courses/1", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
