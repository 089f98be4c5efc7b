//! Scrape Routes - Search and archive results to disk

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use jobscout::NormalizedJob;

use super::error::{ApiError, ErrorBody};
use crate::AppState;

/// Scrape query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScrapeParams {
    /// Keyword (default: nodejs)
    pub keyword: Option<String>,
    /// Location (default: bangalore)
    pub location: Option<String>,
}

/// Scrape response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResponse {
    pub message: String,
    pub keyword: String,
    pub location: String,
    pub jobs_found: usize,
    pub saved_to: String,
    pub jobs: Vec<NormalizedJob>,
}

/// Scrape jobs and archive them
#[utoipa::path(
    get,
    path = "/scrape",
    params(ScrapeParams),
    responses(
        (status = 200, description = "Scrape archived", body = ScrapeResponse),
        (status = 500, description = "Archive write failed", body = ErrorBody),
        (status = 502, description = "Upstream unreachable or failing", body = ErrorBody)
    ),
    tag = "Scrape"
)]
pub async fn scrape_jobs(
    State(state): State<AppState>,
    Query(params): Query<ScrapeParams>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let outcome = state
        .jobs
        .scrape(params.keyword.as_deref(), params.location.as_deref())
        .await?;

    let run = outcome.run;
    Ok(Json(ScrapeResponse {
        message: "Scraping completed successfully".to_string(),
        jobs_found: run.jobs_found(),
        keyword: run.keyword,
        location: run.location,
        saved_to: outcome.saved_to,
        jobs: run.jobs,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/scrape", get(scrape_jobs))
}
