//! Server configuration
//!
//! Read once at startup from the environment (and `.env`, loaded by main).
//! Missing credentials are fatal.

use std::path::PathBuf;
use std::time::Duration;

use jobscout::DomainError;

use crate::adapters::AdzunaConfig;

pub const DEFAULT_COUNTRY: &str = "in";
pub const DEFAULT_BASE_URL: &str = "https://api.adzuna.com/v1/api/jobs";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_DIR: &str = "data";

/// Upstream calls are abandoned after this long.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);
pub const USER_AGENT: &str = "Job-Scraper/1.0";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub adzuna: AdzunaConfig,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let app_id = var("ADZUNA_APP_ID");
        let app_key = var("ADZUNA_APP_KEY");
        let country = var("ADZUNA_COUNTRY").unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        tracing::info!(
            app_id = presence(&app_id),
            app_key = presence(&app_key),
            country = %country,
            "Adzuna config"
        );

        let app_id = app_id.ok_or_else(|| DomainError::missing_env("ADZUNA_APP_ID"))?;
        let app_key = app_key.ok_or_else(|| DomainError::missing_env("ADZUNA_APP_KEY"))?;

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                DomainError::Configuration(format!("PORT must be a port number, got {raw:?}"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            adzuna: AdzunaConfig {
                app_id,
                app_key,
                country,
                base_url: var("ADZUNA_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout: UPSTREAM_TIMEOUT,
                user_agent: USER_AGENT.to_string(),
            },
            port,
            data_dir: var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        })
    }
}

fn presence(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "SET"
    } else {
        "MISSING"
    }
}
