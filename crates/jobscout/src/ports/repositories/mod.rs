//! Repository Ports
//!
//! Abstract interfaces for data persistence.

mod scrape_repository;

pub use scrape_repository::*;
