//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use jobscout::{NormalizedJob, UpstreamErrorKind};

use super::error::ErrorBody;
use super::jobs::JobSearchResponse;
use super::scrape::ScrapeResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::jobs::search_jobs,
        super::scrape::scrape_jobs,
    ),
    components(
        schemas(
            NormalizedJob,
            UpstreamErrorKind,
            ErrorBody,
            JobSearchResponse,
            ScrapeResponse,
        )
    ),
    tags(
        (name = "Jobs", description = "Job search proxied to the upstream API"),
        (name = "Scrape", description = "Search and archive results to disk"),
    ),
    info(
        title = "Jobscout API",
        version = "0.1.0",
        description = "Normalized job search over the Adzuna API"
    )
)]
pub struct ApiDoc;
