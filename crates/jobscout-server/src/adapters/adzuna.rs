//! Adzuna Job Search Client
//!
//! Implements `JobSearchService` against the Adzuna REST API using reqwest.
//! One request per search, no retries. All failures are classified before
//! they leave this module, and the app key is scrubbed from every message.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use jobscout::{
    classify, normalize, DomainError, JobSearchService, NormalizedJob, RawUpstreamJob,
    SearchQuery, TransportFault, UpstreamError, UpstreamFailure,
};

/// Upstream response bodies are cut to this length in logs.
const LOGGED_BODY_LIMIT: usize = 500;

/// Connection settings for the Adzuna API
#[derive(Clone)]
pub struct AdzunaConfig {
    pub app_id: String,
    pub app_key: String,
    /// Two-letter country code used in the endpoint path
    pub country: String,
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl fmt::Debug for AdzunaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdzunaConfig")
            .field("app_id", &self.app_id)
            .field("app_key", &"HIDDEN")
            .field("country", &self.country)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// HTTP client for the Adzuna job search endpoint
#[derive(Clone)]
pub struct AdzunaClient {
    client: Client,
    config: AdzunaConfig,
}

impl AdzunaClient {
    pub fn new(config: AdzunaConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// `<base>/<country>/search/<page>`
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/{}/search/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.country,
            query.page()
        )
    }

    /// Query string parameters for a search, credentials included.
    pub fn query_params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        vec![
            ("app_id", self.config.app_id.clone()),
            ("app_key", self.config.app_key.clone()),
            ("what", query.keyword().to_string()),
            ("where", query.location().to_string()),
            ("results_per_page", query.results_per_page().to_string()),
        ]
    }

    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<NormalizedJob>, UpstreamFailure> {
        let url = self.search_url(query);

        tracing::info!(
            url = %url,
            what = query.keyword(),
            location = query.location(),
            results_per_page = query.results_per_page(),
            app_key = "HIDDEN",
            "Adzuna API request"
        );

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(query))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!("Failed to read Adzuna error body: {}", err.without_url());
                    String::new()
                }
            };
            tracing::error!(
                status = status.as_u16(),
                body = %truncate(&self.scrub(&body), LOGGED_BODY_LIMIT),
                "Adzuna API response error"
            );
            return Err(UpstreamFailure::status(status.as_u16(), body));
        }

        let payload: Value = response.json().await.map_err(|err| {
            if err.is_timeout() {
                UpstreamFailure::Transport(TransportFault::Timeout)
            } else {
                UpstreamFailure::MalformedBody(err.without_url().to_string())
            }
        })?;

        let results = payload
            .get("results")
            .and_then(|results| results.as_array())
            .ok_or_else(|| UpstreamFailure::MalformedBody("missing results field".to_string()))?;

        Ok(results
            .iter()
            .map(|job| normalize(&RawUpstreamJob::from_value(job), query.location()))
            .collect())
    }

    /// Replace the app key in upstream text before it is logged.
    fn scrub(&self, text: &str) -> String {
        if self.config.app_key.is_empty() {
            return text.to_string();
        }
        text.replace(&self.config.app_key, "[redacted]")
    }
}

#[async_trait]
impl JobSearchService for AdzunaClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<NormalizedJob>, UpstreamError> {
        match self.fetch(query).await {
            Ok(jobs) => {
                tracing::debug!("Adzuna returned {} jobs", jobs.len());
                Ok(jobs)
            }
            Err(failure) => {
                let error = classify(&failure).redact(&self.config.app_key);
                tracing::warn!(kind = %error.kind, "Adzuna search failed: {}", error.message);
                Err(error)
            }
        }
    }
}

// reqwest errors embed the request URL, which carries the app key.
fn transport_failure(err: reqwest::Error) -> UpstreamFailure {
    let err = err.without_url();

    let fault = if err.is_timeout() {
        TransportFault::Timeout
    } else if err.is_connect() {
        connect_fault(&err)
    } else {
        TransportFault::Other(err.to_string())
    };

    UpstreamFailure::Transport(fault)
}

fn connect_fault(err: &reqwest::Error) -> TransportFault {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            match io.kind() {
                std::io::ErrorKind::ConnectionRefused => {
                    return TransportFault::ConnectionRefused(io.to_string())
                }
                std::io::ErrorKind::TimedOut => return TransportFault::Timeout,
                _ => {}
            }
        }
        source = cause.source();
    }
    TransportFault::HostUnreachable(err.to_string())
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
