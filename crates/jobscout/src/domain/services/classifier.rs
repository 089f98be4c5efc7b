//! Upstream Error Classifier
//!
//! Total mapping from any upstream failure to an `UpstreamError`.
//! Rules are checked in order and the first match wins.

use serde_json::Value;

use crate::domain::errors::UpstreamError;
use crate::domain::value_objects::{TransportFault, UpstreamErrorKind, UpstreamFailure};

const DETAIL_LIMIT: usize = 200;

/// Classify a failed upstream call. Never fails.
pub fn classify(failure: &UpstreamFailure) -> UpstreamError {
    match failure {
        UpstreamFailure::Status { status, body } => classify_status(*status, body),
        UpstreamFailure::Transport(fault) => classify_transport(fault),
        UpstreamFailure::MalformedBody(reason) => UpstreamError::new(
            UpstreamErrorKind::Unknown,
            format!("Invalid response format from upstream API: {reason}"),
        ),
    }
}

fn classify_status(status: u16, body: &str) -> UpstreamError {
    match status {
        401 => UpstreamError::new(
            UpstreamErrorKind::InvalidCredentials,
            "Invalid API credentials; check configured app id and key.",
        ),
        429 => UpstreamError::new(
            UpstreamErrorKind::RateLimited,
            "Rate limit exceeded; retry later.",
        ),
        400 => {
            let message = match bad_request_detail(body) {
                Some(detail) => format!("Bad request to upstream API: {detail}"),
                None => "Bad request to upstream API; check search parameters.".to_string(),
            };
            UpstreamError::new(UpstreamErrorKind::BadRequest, message)
        }
        s if s >= 500 => UpstreamError::new(
            UpstreamErrorKind::ServerError,
            "Upstream server error; retry later.",
        ),
        s => UpstreamError::new(
            UpstreamErrorKind::Unknown,
            format!("Upstream API error ({s})"),
        ),
    }
}

fn classify_transport(fault: &TransportFault) -> UpstreamError {
    match fault {
        TransportFault::Timeout => {
            UpstreamError::new(UpstreamErrorKind::Timeout, "Request timed out.")
        }
        TransportFault::HostUnreachable(_) | TransportFault::ConnectionRefused(_) => {
            UpstreamError::new(
                UpstreamErrorKind::NetworkUnreachable,
                "Unable to reach upstream API.",
            )
        }
        TransportFault::Other(reason) => UpstreamError::new(
            UpstreamErrorKind::Unknown,
            format!("Failed to fetch jobs from upstream API: {reason}"),
        ),
    }
}

/// Pull a human-readable detail out of a 400 body, JSON or plain text.
fn bad_request_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let detail = match serde_json::from_str::<Value>(body) {
        Ok(json) => ["display", "exception", "message"]
            .iter()
            .find_map(|key| json.get(*key).and_then(|v| v.as_str()))
            .or_else(|| {
                json.get("error")
                    .and_then(|err| err.get("message"))
                    .and_then(|msg| msg.as_str())
            })
            .map(|s| s.trim().to_string()),
        Err(_) => Some(body.to_string()),
    }?;

    if detail.is_empty() {
        return None;
    }
    Some(detail.chars().take(DETAIL_LIMIT).collect())
}
