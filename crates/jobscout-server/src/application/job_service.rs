//! Job Application Service (Use Case)
//!
//! Orchestrates job searches and archived scrapes.

use std::sync::Arc;
use thiserror::Error;

use jobscout::{
    DomainError, JobSearchService, NormalizedJob, ScrapeRepository, ScrapeRun, SearchQuery,
    UpstreamError,
};

pub const DEFAULT_SCRAPE_KEYWORD: &str = "nodejs";
pub const DEFAULT_SCRAPE_LOCATION: &str = "bangalore";
pub const SCRAPE_RESULTS_PER_PAGE: u32 = 20;

/// Errors surfaced by the application layer
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A completed scrape and where it was archived
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub run: ScrapeRun,
    pub saved_to: String,
}

/// Application service for job operations
pub struct JobService {
    search: Arc<dyn JobSearchService>,
    archive: Arc<dyn ScrapeRepository>,
}

impl JobService {
    pub fn new(search: Arc<dyn JobSearchService>, archive: Arc<dyn ScrapeRepository>) -> Self {
        Self { search, archive }
    }

    /// Search the upstream API
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<NormalizedJob>, UpstreamError> {
        let jobs = self.search.search(query).await?;

        tracing::info!(
            "🔍 Search: {} in {} (page {}) -> {} jobs",
            query.keyword(),
            query.location(),
            query.page(),
            jobs.len()
        );

        Ok(jobs)
    }

    /// Search and archive the results. Blank keyword or location use the defaults.
    pub async fn scrape(
        &self,
        keyword: Option<&str>,
        location: Option<&str>,
    ) -> Result<ScrapeOutcome, ServiceError> {
        let keyword = non_blank(keyword).unwrap_or(DEFAULT_SCRAPE_KEYWORD);
        let location = non_blank(location).unwrap_or(DEFAULT_SCRAPE_LOCATION);

        tracing::info!("Scraping jobs for: {} in {}", keyword, location);

        let query =
            SearchQuery::new(keyword, location)?.with_results_per_page(SCRAPE_RESULTS_PER_PAGE);
        let jobs = self.search(&query).await?;

        let run = ScrapeRun::new(query.keyword(), query.location(), jobs);
        let saved_to = self.archive.save(&run).await?;

        Ok(ScrapeOutcome { run, saved_to })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
