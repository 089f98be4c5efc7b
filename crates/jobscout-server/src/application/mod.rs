//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the upstream search service and the scrape archive.

mod job_service;

pub use job_service::{JobService, ScrapeOutcome, ServiceError};
