//! Configuration module
//!
//! The calendar talks to the HR backend on behalf of one signed-in viewer.
//! Both the backend location and the viewer identity come from a JSON file,
//! with a couple of environment overrides for deployment.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::calendar::{EventFilters, ViewMode};
use crate::error::{AppError, AppResult};
use crate::http_config::HttpConfig;
use crate::models::Viewer;

pub const CONFIG_PATH_ENV: &str = "TEAMCAL_CONFIG";
pub const API_URL_ENV: &str = "TEAMCAL_API_URL";
pub const TOKEN_ENV: &str = "TEAMCAL_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub auth_token: Option<String>,
    pub viewer: Viewer,
    pub default_view: ViewMode,
    pub include_leaves: bool,
    pub include_birthdays: bool,
    pub include_anniversaries: bool,
    /// Drop event responses that resolve after a newer fetch was issued.
    /// Off by default: the last response to arrive wins.
    pub discard_stale_responses: bool,
    pub http: HttpSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            auth_token: None,
            viewer: Viewer::default(),
            default_view: ViewMode::Month,
            include_leaves: true,
            include_birthdays: true,
            include_anniversaries: true,
            discard_stale_responses: false,
            http: HttpSettings::default(),
        }
    }
}

impl AppConfig {
    /// `$TEAMCAL_CONFIG`, else `<config dir>/teamcal/config.json`.
    pub fn config_path() -> Option<PathBuf> {
        match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("teamcal").join("config.json")),
        }
    }

    /// Reads the config file when present, falls back to defaults otherwise,
    /// then applies environment overrides.
    pub fn load() -> AppResult<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            Some(path) => {
                warn!("No config file at {}, using defaults", path.display());
                Self::default()
            }
            None => {
                warn!("Could not determine config directory, using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: AppConfig = serde_json::from_str(&raw).map_err(|e| {
            AppError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
        if let Ok(token) = env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                self.auth_token = Some(token.trim().to_string());
            }
        }
    }

    pub fn default_filters(&self) -> EventFilters {
        EventFilters {
            include_leaves: self.include_leaves,
            include_birthdays: self.include_birthdays,
            include_anniversaries: self.include_anniversaries,
            department_id: None,
        }
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            connect_timeout: Duration::from_secs(self.http.connect_timeout_secs),
            timeout: self.http.request_timeout_secs.map(Duration::from_secs),
            ..HttpConfig::default()
        }
    }
}

/// Validates the loaded configuration before the UI starts.
pub fn validate_config(config: &AppConfig) -> AppResult<()> {
    let url = Url::parse(&config.api_base_url).map_err(|e| {
        AppError::config(format!("Invalid API base URL '{}': {}", config.api_base_url, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "API base URL must use http or https, got '{}://'",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(AppError::config("API base URL must include a host"));
    }

    if config.viewer.id.trim().is_empty() {
        return Err(AppError::config("viewer.id must be set"));
    }

    if config.auth_token.is_none() {
        warn!("No auth token configured; requests will be sent unauthenticated");
    }

    info!(
        "Configuration valid: backend {} as {} ({})",
        config.api_base_url,
        config.viewer.id,
        config.viewer.role.as_str()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn valid_config() -> AppConfig {
        AppConfig {
            viewer: Viewer::new("7", "Sam Lee", Role::Employee),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_validation_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = AppConfig {
            api_base_url: "ftp://hr.example.com/api".to_string(),
            ..valid_config()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_rejects_missing_viewer() {
        let err = validate_config(&AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("viewer.id"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"viewer": {"id": 3, "role": "admin"}, "default_view": "week"}"#)
                .unwrap();
        assert_eq!(config.viewer.id, "3");
        assert_eq!(config.viewer.role, Role::Admin);
        assert_eq!(config.default_view, ViewMode::Week);
        assert!(config.include_leaves);
        assert!(!config.discard_stale_responses);
    }

    #[test]
    fn test_http_config_conversion() {
        let mut config = valid_config();
        config.http.request_timeout_secs = Some(20);
        let http = config.http_config();
        assert_eq!(http.timeout, Some(Duration::from_secs(20)));
    }
}
