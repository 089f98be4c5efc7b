//! Scrape Repository Port
//!
//! Defines the interface for archiving scrape results.

use async_trait::async_trait;

use crate::domain::entities::ScrapeRun;
use crate::domain::errors::DomainError;

/// Repository interface for scrape archives
#[async_trait]
pub trait ScrapeRepository: Send + Sync {
    /// Persist a scrape run, returning the name it was saved under
    async fn save(&self, run: &ScrapeRun) -> Result<String, DomainError>;
}
