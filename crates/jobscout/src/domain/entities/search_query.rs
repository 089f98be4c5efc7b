//! SearchQuery Entity - Parameters of one upstream search

use crate::domain::errors::DomainError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 10;
/// Upstream refuses page sizes above this.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// Validated search parameters. Out-of-range paging values are clamped, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
    location: String,
    page: u32,
    results_per_page: u32,
}

impl SearchQuery {
    /// Create a query; keyword and location must be non-blank.
    pub fn new(
        keyword: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let keyword = keyword.into().trim().to_string();
        let location = location.into().trim().to_string();

        if keyword.is_empty() || location.is_empty() {
            return Err(DomainError::Validation(
                "keyword and location are required".to_string(),
            ));
        }

        Ok(Self {
            keyword,
            location,
            page: DEFAULT_PAGE,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
        })
    }

    /// Set the page number (raised to 1 if lower)
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set the page size (clamped into 1..=50)
    pub fn with_results_per_page(mut self, results_per_page: u32) -> Self {
        self.results_per_page = results_per_page.clamp(1, MAX_RESULTS_PER_PAGE);
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results_per_page(&self) -> u32 {
        self.results_per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = SearchQuery::new("rust", "bangalore").unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.results_per_page(), 10);
    }

    #[test]
    fn test_trims_and_rejects_blank() {
        let query = SearchQuery::new("  rust ", " pune").unwrap();
        assert_eq!(query.keyword(), "rust");
        assert_eq!(query.location(), "pune");

        assert!(matches!(
            SearchQuery::new("   ", "pune"),
            Err(DomainError::Validation(_))
        ));
        assert!(SearchQuery::new("rust", "").is_err());
    }

    #[test]
    fn test_clamps_paging() {
        let query = SearchQuery::new("rust", "delhi")
            .unwrap()
            .with_page(0)
            .with_results_per_page(999);
        assert_eq!(query.page(), 1);
        assert_eq!(query.results_per_page(), 50);

        let query = query.with_results_per_page(0);
        assert_eq!(query.results_per_page(), 1);
    }
}
