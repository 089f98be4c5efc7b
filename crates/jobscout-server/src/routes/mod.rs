//! Jobscout API Routes
//!
//! - /api/jobs/search - Job search proxied to Adzuna
//! - /scrape - Search and archive results to the data directory

pub mod error;
pub mod jobs;
pub mod scrape;
pub mod swagger;
