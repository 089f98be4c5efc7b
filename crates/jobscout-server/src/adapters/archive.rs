//! Filesystem Scrape Archive
//!
//! Writes each scrape run as a pretty-printed JSON array of jobs into the data directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use jobscout::{DomainError, ScrapeRepository, ScrapeRun};

/// Filesystem implementation of ScrapeRepository
pub struct FsScrapeRepository {
    data_dir: PathBuf,
}

impl FsScrapeRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory (and parents) if missing
    pub async fn ensure_dir(&self) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| {
                DomainError::Repository(format!(
                    "Failed to create data directory {}: {e}",
                    self.data_dir.display()
                ))
            })
    }

    /// `jobs_<keyword>_<location>_<unix millis>.json`
    pub fn file_name(run: &ScrapeRun) -> String {
        format!(
            "jobs_{}_{}_{}.json",
            sanitize(&run.keyword),
            sanitize(&run.location),
            run.scraped_at.timestamp_millis()
        )
    }
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl ScrapeRepository for FsScrapeRepository {
    async fn save(&self, run: &ScrapeRun) -> Result<String, DomainError> {
        self.ensure_dir().await?;

        let file_name = Self::file_name(run);
        let path = self.data_dir.join(&file_name);

        let body = serde_json::to_vec_pretty(&run.jobs)
            .map_err(|e| DomainError::Repository(format!("Failed to serialize jobs: {e}")))?;

        tokio::fs::write(&path, body).await.map_err(|e| {
            DomainError::Repository(format!("Failed to write {}: {e}", path.display()))
        })?;

        tracing::info!(
            "💾 Saved {} jobs for {} in {} to {}",
            run.jobs_found(),
            run.keyword,
            run.location,
            path.display()
        );

        Ok(file_name)
    }
}
