//! API error responses
//!
//! Maps classified upstream failures and domain errors onto HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use jobscout::{DomainError, UpstreamError, UpstreamErrorKind};

use crate::application::ServiceError;

pub const ARCHIVE_FAILED: &str = "Failed to archive scrape results";

/// Error body returned by every route
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    /// Present when the failure came from the upstream API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<UpstreamErrorKind>,
}

/// Route-level error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(err) => status_for(err.kind),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// HTTP status for each upstream failure kind
pub fn status_for(kind: UpstreamErrorKind) -> StatusCode {
    match kind {
        UpstreamErrorKind::InvalidCredentials => StatusCode::BAD_GATEWAY,
        UpstreamErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        UpstreamErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        UpstreamErrorKind::ServerError => StatusCode::BAD_GATEWAY,
        UpstreamErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        UpstreamErrorKind::NetworkUnreachable => StatusCode::BAD_GATEWAY,
        UpstreamErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => ApiError::BadRequest(message),
            DomainError::Repository(detail) => {
                tracing::error!("❌ Archive error: {}", detail);
                ApiError::Internal(ARCHIVE_FAILED.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Upstream(e) => e.into(),
            ServiceError::Domain(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(error) | ApiError::Internal(error) => {
                ErrorBody { error, kind: None }
            }
            ApiError::Upstream(err) => ErrorBody {
                error: err.message,
                kind: Some(err.kind),
            },
        };

        if status.is_server_error() {
            tracing::error!("❌ {} {}", status.as_u16(), body.error);
        } else {
            tracing::warn!("⚠️  {} {}", status.as_u16(), body.error);
        }

        (status, Json(body)).into_response()
    }
}
