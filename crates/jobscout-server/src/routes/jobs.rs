//! Job Search Routes - Proxy to the upstream job API

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use jobscout::{NormalizedJob, SearchQuery};

use super::error::{ApiError, ErrorBody};
use crate::AppState;

pub const MISSING_PARAMS: &str = "Missing required query params: what, where";

/// Job search query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobSearchParams {
    /// Keyword to search for
    pub what: Option<String>,
    /// Location to search in
    #[serde(rename = "where")]
    pub location: Option<String>,
    /// Page number, raised to 1 when lower
    pub page: Option<i64>,
    /// Page size, clamped to 1..=50
    pub results_per_page: Option<i64>,
}

/// Job search response
#[derive(Debug, Serialize, ToSchema)]
pub struct JobSearchResponse {
    pub count: usize,
    pub jobs: Vec<NormalizedJob>,
}

/// Search jobs
#[utoipa::path(
    get,
    path = "/api/jobs/search",
    params(JobSearchParams),
    responses(
        (status = 200, description = "Normalized jobs", body = JobSearchResponse),
        (status = 400, description = "Missing parameters or rejected by upstream", body = ErrorBody),
        (status = 429, description = "Upstream rate limit", body = ErrorBody),
        (status = 502, description = "Upstream unreachable or failing", body = ErrorBody),
        (status = 504, description = "Upstream timed out", body = ErrorBody)
    ),
    tag = "Jobs"
)]
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> Result<Json<JobSearchResponse>, ApiError> {
    let mut query = SearchQuery::new(
        params.what.unwrap_or_default(),
        params.location.unwrap_or_default(),
    )
    .map_err(|_| ApiError::BadRequest(MISSING_PARAMS.to_string()))?;

    if let Some(page) = params.page {
        query = query.with_page(saturate(page));
    }
    if let Some(results_per_page) = params.results_per_page {
        query = query.with_results_per_page(saturate(results_per_page));
    }

    let jobs = state.jobs.search(&query).await?;

    Ok(Json(JobSearchResponse {
        count: jobs.len(),
        jobs,
    }))
}

// Paging outside the u32 range saturates. SearchQuery clamps the rest.
fn saturate(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/jobs/search", get(search_jobs))
}
