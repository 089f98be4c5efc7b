//! Jobscout Domain Library
//!
//! Core domain types and interfaces for the Jobscout job search proxy.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (SearchQuery, RawUpstreamJob, NormalizedJob, ScrapeRun)
//!   - `value_objects/`: Immutable value types (SalaryRange, UpstreamErrorKind, UpstreamFailure)
//!   - `services/`: Pure domain services (normalizer, classifier)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use jobscout::domain::{SearchQuery, NormalizedJob};
//! use jobscout::ports::JobSearchService;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    classify, normalize, normalize_at, DomainError, NormalizedJob, RawUpstreamJob, SalaryRange,
    ScrapeRun, SearchQuery, TransportFault, UpstreamError, UpstreamErrorKind, UpstreamFailure,
    JOB_SOURCE,
};
pub use ports::{JobSearchService, ScrapeRepository};
