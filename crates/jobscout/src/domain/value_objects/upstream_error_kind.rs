//! UpstreamErrorKind - Closed taxonomy of upstream failures

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every failed upstream call is classified as exactly one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
pub enum UpstreamErrorKind {
    InvalidCredentials,
    RateLimited,
    BadRequest,
    ServerError,
    Timeout,
    NetworkUnreachable,
    Unknown,
}

impl UpstreamErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamErrorKind::InvalidCredentials => "InvalidCredentials",
            UpstreamErrorKind::RateLimited => "RateLimited",
            UpstreamErrorKind::BadRequest => "BadRequest",
            UpstreamErrorKind::ServerError => "ServerError",
            UpstreamErrorKind::Timeout => "Timeout",
            UpstreamErrorKind::NetworkUnreachable => "NetworkUnreachable",
            UpstreamErrorKind::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for UpstreamErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
