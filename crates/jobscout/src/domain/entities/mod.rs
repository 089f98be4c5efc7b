//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - SearchQuery: Validated, clamped search parameters
//! - RawUpstreamJob: Loosely shaped upstream job record
//! - NormalizedJob: Fixed output schema served to callers
//! - ScrapeRun: Archived result of one scrape

mod job;
mod scrape_run;
mod search_query;

pub use job::*;
pub use scrape_run::*;
pub use search_query::*;
