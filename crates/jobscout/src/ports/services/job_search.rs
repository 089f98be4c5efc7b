//! Job Search Service Port
//!
//! Abstract interface for the upstream job listing API.

use async_trait::async_trait;

use crate::domain::entities::{NormalizedJob, SearchQuery};
use crate::domain::errors::UpstreamError;

/// Service interface for job search operations
#[async_trait]
pub trait JobSearchService: Send + Sync {
    /// Run one upstream search and return the normalized jobs in upstream order.
    ///
    /// Every failure is already classified; raw transport errors never escape.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<NormalizedJob>, UpstreamError>;
}
