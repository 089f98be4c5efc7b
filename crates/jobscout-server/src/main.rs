use anyhow::Context;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod routes;
#[cfg(test)]
mod testing;

use adapters::{AdzunaClient, FsScrapeRepository};
use application::JobService;
use config::Config;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<JobService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
    timestamp: DateTime<Utc>,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Jobscout API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Build the full router around an application state
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::jobs::router())
        .merge(routes::scrape::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    tracing::info!("🔎 Jobscout API initializing...");

    let config = Config::from_env().context("Failed to load configuration")?;

    let archive = FsScrapeRepository::new(&config.data_dir);
    archive
        .ensure_dir()
        .await
        .context("Failed to prepare data directory")?;
    tracing::info!("💾 Scrape archive: {}", archive.data_dir().display());

    let client = AdzunaClient::new(config.adzuna.clone()).context("Failed to build Adzuna client")?;
    tracing::info!("🌐 Adzuna client initialized (country: {})", config.adzuna.country);

    let state = AppState {
        jobs: Arc::new(JobService::new(Arc::new(client), Arc::new(archive))),
    };

    let router = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("📚 Swagger UI: http://localhost:{}/swagger-ui", config.port);
    tracing::info!("❤️  Health check: http://localhost:{}/health", config.port);
    tracing::info!("✅ Jobscout API listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
