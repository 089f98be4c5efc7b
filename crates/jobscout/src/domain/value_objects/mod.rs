//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod salary;
mod upstream_error_kind;
mod upstream_failure;

pub use salary::*;
pub use upstream_error_kind::*;
pub use upstream_failure::*;
