//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use super::value_objects::UpstreamErrorKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    /// Missing or invalid startup configuration. Fatal, never produced per request.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn missing_env<T: AsRef<str>>(name: T) -> Self {
        Self::Configuration(format!(
            "{} missing in environment variables",
            name.as_ref()
        ))
    }
}

/// A classified failure of a call to the upstream job API.
///
/// The message is always safe to show to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UpstreamError {
    pub kind: UpstreamErrorKind,
    pub message: String,
}

impl UpstreamError {
    pub fn new(kind: UpstreamErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Replace every occurrence of `secret` in the message.
    pub fn redact(self, secret: &str) -> Self {
        if secret.is_empty() || !self.message.contains(secret) {
            return self;
        }
        Self {
            kind: self.kind,
            message: self.message.replace(secret, "[redacted]"),
        }
    }
}
