//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod adzuna;
pub mod archive;

// Re-exports
pub use adzuna::{AdzunaClient, AdzunaConfig};
pub use archive::FsScrapeRepository;
