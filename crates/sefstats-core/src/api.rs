//! HTTP client for the two stats endpoints.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{SiteStats, UserStats};

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

/// Client for `/api/site_stats` and `/api/user_stats/{uid}`. Cheap to
/// clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct StatsClient {
    base_url: String,
    client: reqwest::Client,
}

impl StatsClient {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the site-wide aggregate, keyed by time window.
    pub async fn site_stats(&self) -> Result<SiteStats, StatsError> {
        self.get_json(SITE_STATS_PATH).await
    }

    /// Fetch one user's stats, keyed by time window.
    pub async fn user_stats(&self, uid: u64) -> Result<UserStats, StatsError> {
        self.get_json(&user_stats_path(uid)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StatsError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching stats");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status { status, url });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| StatsError::Decode { url, source })
    }
}

const SITE_STATS_PATH: &str = "/api/site_stats";

fn user_stats_path(uid: u64) -> String {
    format!("/api/user_stats/{uid}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(SITE_STATS_PATH, "/api/site_stats");
        assert_eq!(user_stats_path(8972), "/api/user_stats/8972");
    }
}
