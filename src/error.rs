//! Upstream fetch errors
//!
//! Network failure, non-success status and malformed body are kept apart for
//! logging only; every page-level caller collapses them into one generic
//! failure sentence.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API Error: {status}")]
    Status {
        status: StatusCode,
        /// `error` field of the response body, when the upstream sent one
        message: Option<String>,
    },

    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl FetchError {
    /// Server-supplied message, if any
    ///
    /// Only the corporate info lookup surfaces this to the user.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            FetchError::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_only_for_status() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            message: Some("not found".to_string()),
        };
        assert_eq!(err.user_message(), Some("not found"));
        assert_eq!(err.to_string(), "API Error: 404 Not Found");

        let bare = FetchError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(bare.user_message(), None);

        let malformed: FetchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(malformed.user_message(), None);
    }
}
