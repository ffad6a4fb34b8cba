//! Analytics backend client
//!
//! Read-only JSON-over-HTTP client for the external analytics service, plus
//! the backend refresh trigger. The four analytics reads for one user are
//! issued concurrently and joined all-or-nothing: any single failure fails
//! the whole bundle, so the caller never sees partial data.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::{
    AnalyticsBundle, SessionsResponse, SummaryBundle, TimeDistributionResponse, TrendResponse,
};

/// Default analytics backend endpoint
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analytics backend (no trailing slash required)
    pub base_url: String,
    /// Per-request timeout applied to every call
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the analytics backend
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalyticsClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Aggregate summary: totals plus top artists and genres
    pub async fn fetch_summary(&self, user_id: &str) -> Result<SummaryBundle, ClientError> {
        self.get_json("summary", "/analytics/summary", user_id).await
    }

    /// Chronological plays-per-day sequence
    pub async fn fetch_daily_trend(
        &self,
        user_id: &str,
    ) -> Result<TrendResponse, ClientError> {
        self.get_json("daily-trend", "/analytics/daily-trend", user_id)
            .await
    }

    /// Sparse (weekday, hour) play counts
    pub async fn fetch_time_distribution(
        &self,
        user_id: &str,
    ) -> Result<TimeDistributionResponse, ClientError> {
        self.get_json("time-distribution", "/analytics/time-distribution", user_id)
            .await
    }

    /// Listening sessions, sorted descending by duration upstream
    pub async fn fetch_sessions(&self, user_id: &str) -> Result<SessionsResponse, ClientError> {
        self.get_json("sessions", "/analytics/sessions", user_id)
            .await
    }

    /// Fetch all four analytics resources concurrently
    ///
    /// Fan-out/fan-in join: the result fails as soon as any read fails, and
    /// no partial bundle is ever returned.
    pub async fn fetch_bundle(&self, user_id: &str) -> Result<AnalyticsBundle, ClientError> {
        tracing::debug!(user_id, "fetching analytics bundle");

        let (summary, trend, time_distribution, sessions) = tokio::try_join!(
            self.fetch_summary(user_id),
            self.fetch_daily_trend(user_id),
            self.fetch_time_distribution(user_id),
            self.fetch_sessions(user_id),
        )?;

        Ok(AnalyticsBundle {
            summary,
            trend: trend.points,
            time_distribution: time_distribution.points,
            sessions: sessions.sessions,
        })
    }

    /// Ask the backend to refresh its stored data for this user
    ///
    /// Success is signaled by a success status; the body is ignored.
    pub async fn trigger_sync(&self, user_id: &str) -> Result<(), ClientError> {
        let endpoint = "sync";
        let url = format!("{}/spotify/sync/{}", self.base_url, user_id);

        tracing::info!(user_id, "triggering backend refresh");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { endpoint, status });
        }

        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        user_id: &str,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(|source| ClientError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { endpoint, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode { endpoint, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = AnalyticsClient::new(ClientConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
        .unwrap();

        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
