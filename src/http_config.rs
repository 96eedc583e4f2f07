//! HTTP client configuration module
//!
//! Builds the single `reqwest::Client` the backend API client uses.
//! Calls are never retried; a failure is reported once and left to the user.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::AppResult;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Total request timeout; `None` waits for the server indefinitely
    pub timeout: Option<Duration>,
    /// How long idle pooled connections are kept
    pub pool_idle_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: None,
            pool_idle_timeout: Duration::from_secs(90),
            user_agent: format!("teamcal/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a reqwest client with this configuration
    pub fn build_client(&self) -> AppResult<Client> {
        let mut builder = ClientBuilder::new()
            .user_agent(self.user_agent.clone())
            .connect_timeout(self.connect_timeout)
            .tcp_keepalive(Duration::from_secs(30))
            .pool_idle_timeout(self.pool_idle_timeout)
            .pool_max_idle_per_host(2);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_request_timeout() {
        let config = HttpConfig::default();
        assert!(config.timeout.is_none());
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("teamcal/"));
    }

    #[test]
    fn test_build_client() {
        let config = HttpConfig {
            timeout: Some(Duration::from_secs(5)),
            ..HttpConfig::default()
        };
        assert!(config.build_client().is_ok());
    }
}
