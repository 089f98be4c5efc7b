//! Service Ports
//!
//! Abstract interfaces for external services.

mod job_search;

pub use job_search::*;
