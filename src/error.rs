use thiserror::Error;

/// Classifies every way a single forwarding attempt can fail. The forwarder
/// performs no local recovery; all of these surface to the listener boundary,
/// which logs and swallows them.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("notification service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("notification service returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl RelayError {
    /// Short classification label for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::Json(_) => "json",
            RelayError::Token(_) => "token",
            RelayError::Http(_) => "http",
            RelayError::Status { .. } => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_and_kind() {
        let json_err = RelayError::from(serde_json::from_str::<serde_json::Value>("{not json").unwrap_err());
        assert_eq!(json_err.kind(), "json");
        assert!(json_err.to_string().starts_with("invalid JSON"));

        let status_err = RelayError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert_eq!(status_err.kind(), "status");
        assert_eq!(
            status_err.to_string(),
            "notification service returned status 500 Internal Server Error: boom"
        );
    }
}
