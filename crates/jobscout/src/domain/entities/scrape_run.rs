//! ScrapeRun Entity - One archived search result

use chrono::{DateTime, Utc};

use super::NormalizedJob;

/// The outcome of a scrape, ready to be archived.
#[derive(Debug, Clone)]
pub struct ScrapeRun {
    pub keyword: String,
    pub location: String,
    pub jobs: Vec<NormalizedJob>,
    pub scraped_at: DateTime<Utc>,
}

impl ScrapeRun {
    pub fn new(
        keyword: impl Into<String>,
        location: impl Into<String>,
        jobs: Vec<NormalizedJob>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            location: location.into(),
            jobs,
            scraped_at: Utc::now(),
        }
    }

    pub fn jobs_found(&self) -> usize {
        self.jobs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_time_and_counts_jobs() {
        let before = Utc::now();
        let run = ScrapeRun::new("nodejs", "bangalore", Vec::new());

        assert_eq!(run.keyword, "nodejs");
        assert_eq!(run.location, "bangalore");
        assert_eq!(run.jobs_found(), 0);
        assert!(run.scraped_at >= before);
    }
}
