//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! the domain crates' error types.

mod app;
mod config;

use anyhow::Context;
use auth::{AuthConfig, PgUserRepository, users_router};
use axum::Router;
use courses::{PgCourseRepository, courses_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,courses=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    tracing::info!("Migrations completed");

    let auth_config = AuthConfig::new(config.password_pepper.clone());
    if auth_config.pepper().is_none() {
        tracing::warn!("PASSWORD_PEPPER not set, hashing without pepper");
    }

    // Build router
    let users = PgUserRepository::new(pool.clone());
    let api = Router::new()
        .merge(users_router(users.clone(), auth_config.clone()))
        .merge(courses_router(PgCourseRepository::new(pool), users, auth_config));
    let app = app::build_router(api, config.frontend_origins);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
