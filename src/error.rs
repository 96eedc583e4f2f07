use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

impl AppError {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn permission_denied<S: Into<String>>(msg: S) -> Self {
        Self::PermissionDenied(msg.into())
    }

    pub fn is_pii_safe(&self) -> bool {
        match self {
            Self::Network(_) | Self::Decode(_) | Self::Anyhow(_) => false,
            Self::Api { .. }
            | Self::InvalidInput(_)
            | Self::Config(_)
            | Self::NotFound(_)
            | Self::PermissionDenied(_) => true,
        }
    }

    pub fn to_safe_string(&self) -> String {
        if self.is_pii_safe() {
            self.to_string()
        } else {
            match self {
                Self::Network(_) => "Network request failed".to_string(),
                Self::Decode(_) => "Unexpected response from server".to_string(),
                Self::Anyhow(_) => "Operation failed".to_string(),
                _ => self.to_string(),
            }
        }
    }

    /// Text shown to the user: the backend's `detail` verbatim when it sent
    /// one, our own validation message for local failures, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            Self::InvalidInput(msg) | Self::PermissionDenied(msg) | Self::NotFound(msg) => {
                msg.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_detail_is_shown_verbatim() {
        let err = AppError::Api {
            status: 400,
            detail: Some("End date must be after start date".to_string()),
        };
        assert_eq!(
            err.user_message("Failed to save event"),
            "End date must be after start date"
        );
    }

    #[test]
    fn test_fallback_without_detail() {
        let err = AppError::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message("Failed to delete event"), "Failed to delete event");
        assert_eq!(err.to_string(), "API error (500): no detail");
    }

    #[test]
    fn test_decode_errors_are_hidden() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(!err.is_pii_safe());
        assert_eq!(err.to_safe_string(), "Unexpected response from server");
        assert_eq!(err.user_message("Failed to load events"), "Failed to load events");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::invalid_input("Title is required");
        assert_eq!(err.user_message("Failed to save event"), "Title is required");
    }
}
