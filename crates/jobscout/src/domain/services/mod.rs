//! Domain Services
//!
//! Stateless logic shared by every upstream adapter.

pub mod classifier;
pub mod normalizer;

pub use classifier::classify;
pub use normalizer::{normalize, normalize_at};
