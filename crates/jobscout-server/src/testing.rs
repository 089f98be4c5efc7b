//! Test doubles for the port traits

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use jobscout::{
    normalize, DomainError, JobSearchService, NormalizedJob, RawUpstreamJob, ScrapeRepository,
    ScrapeRun, SearchQuery, UpstreamError, UpstreamErrorKind,
};

use crate::application::JobService;
use crate::AppState;

/// Search stub returning canned jobs (or a canned error) and recording queries
#[derive(Default)]
pub struct StubSearch {
    pub titles: Vec<String>,
    pub error: Option<UpstreamError>,
    pub queries: Mutex<Vec<SearchQuery>>,
}

impl StubSearch {
    pub fn with_titles(titles: &[&str]) -> Self {
        Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn failing(kind: UpstreamErrorKind, message: &str) -> Self {
        Self {
            error: Some(UpstreamError::new(kind, message)),
            ..Default::default()
        }
    }
}

#[async_trait]
impl JobSearchService for StubSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<NormalizedJob>, UpstreamError> {
        self.queries.lock().unwrap().push(query.clone());
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(self
            .titles
            .iter()
            .map(|title| {
                let raw = RawUpstreamJob {
                    title: Some(title.clone()),
                    ..Default::default()
                };
                normalize(&raw, query.location())
            })
            .collect())
    }
}

/// Archive stub keeping runs in memory
#[derive(Default)]
pub struct MemoryArchive {
    pub runs: Mutex<Vec<ScrapeRun>>,
    pub fail: bool,
}

#[async_trait]
impl ScrapeRepository for MemoryArchive {
    async fn save(&self, run: &ScrapeRun) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::Repository("disk full".to_string()));
        }
        self.runs.lock().unwrap().push(run.clone());
        Ok(format!("jobs_{}_{}.json", run.keyword, run.location))
    }
}

/// App state over a stub search and an in-memory archive
pub fn test_state(search: Arc<StubSearch>) -> AppState {
    test_state_with(search, Arc::new(MemoryArchive::default()))
}

pub fn test_state_with(search: Arc<StubSearch>, archive: Arc<MemoryArchive>) -> AppState {
    AppState {
        jobs: Arc::new(JobService::new(search, archive)),
    }
}

/// Send a GET through the router and decode the JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
