use std::fmt;

/// Custom error type for qbee operations
#[derive(Debug)]
pub enum QbeeError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// API returned a non-success response
    Api {
        method: String,
        path: String,
        status: u16,
        /// Vendor error code from the `{error: {code, message}}` body
        code: Option<i64>,
        message: String,
    },
    /// Login failed or returned an unusable token
    Auth(String),
    /// Input rejected before any request was sent
    Validation(String),
    /// Commit failed after the change was staged
    Commit {
        /// Content hash of the staged change
        sha: String,
        commit: Box<QbeeError>,
        /// Set when removing the staged change failed as well
        rollback: Option<Box<QbeeError>>,
    },
    /// Credentials not found in any source
    CredentialsNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON or YAML parsing error
    Json(String),
    /// Local file error
    Io(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for QbeeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QbeeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            QbeeError::Api {
                method,
                path,
                status,
                code,
                message,
            } => match code {
                Some(code) => write!(
                    f,
                    "{} {} failed (status {}, code {}): {}",
                    method, path, status, code, message
                ),
                None => write!(f, "{} {} failed (status {}): {}", method, path, status, message),
            },
            QbeeError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
            QbeeError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            QbeeError::Commit {
                sha,
                commit,
                rollback,
            } => {
                write!(f, "Commit failed: {}", commit)?;
                if let Some(rollback) = rollback {
                    write!(
                        f,
                        " (rollback of staged change '{}' also failed: {})",
                        sha, rollback
                    )?;
                }
                Ok(())
            }
            QbeeError::CredentialsNotFound(msg) => write!(f, "{}", msg),
            QbeeError::Credentials(msg) => write!(f, "{}", msg),
            QbeeError::Json(msg) => write!(f, "JSON error: {}", msg),
            QbeeError::Io(msg) => write!(f, "I/O error: {}", msg),
            QbeeError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for QbeeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QbeeError::Http(e) => Some(e),
            QbeeError::Commit { commit, .. } => Some(commit.as_ref()),
            _ => None,
        }
    }
}

impl QbeeError {
    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            QbeeError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 404 responses
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for QbeeError {
    fn from(err: reqwest::Error) -> Self {
        QbeeError::Http(err)
    }
}

impl From<serde_json::Error> for QbeeError {
    fn from(err: serde_json::Error) -> Self {
        QbeeError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for QbeeError {
    fn from(err: serde_yml::Error) -> Self {
        QbeeError::Json(err.to_string())
    }
}

impl From<std::io::Error> for QbeeError {
    fn from(err: std::io::Error) -> Self {
        QbeeError::Io(err.to_string())
    }
}

impl From<std::env::VarError> for QbeeError {
    fn from(err: std::env::VarError) -> Self {
        QbeeError::Config(err.to_string())
    }
}

/// Result type alias for qbee operations
pub type Result<T> = std::result::Result<T, QbeeError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(message: &str) -> QbeeError {
        QbeeError::Api {
            method: "POST".to_string(),
            path: "/commit".to_string(),
            status: 500,
            code: Some(1),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_api_error_display() {
        let err = QbeeError::Api {
            method: "GET".to_string(),
            path: "/config/tag/t1".to_string(),
            status: 404,
            code: Some(404),
            message: "Not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("GET"));
        assert!(msg.contains("/config/tag/t1"));
        assert!(msg.contains("404"));
        assert!(msg.contains("Not found"));
    }

    #[test]
    fn test_api_error_display_without_code() {
        let err = QbeeError::Api {
            method: "DELETE".to_string(),
            path: "/changes".to_string(),
            status: 502,
            code: None,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "DELETE /changes failed (status 502): Bad Gateway");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QbeeError>();
    }

    #[test]
    fn test_commit_error_without_rollback_failure() {
        let err = QbeeError::Commit {
            sha: "abc123".to_string(),
            commit: Box::new(api_error("network timeout")),
            rollback: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("network timeout"));
        assert!(!msg.contains("rollback"));
    }

    #[test]
    fn test_commit_error_reports_both_failures() {
        let err = QbeeError::Commit {
            sha: "abc123".to_string(),
            commit: Box::new(api_error("network timeout")),
            rollback: Some(Box::new(api_error("not found"))),
        };
        let msg = err.to_string();
        assert!(msg.contains("network timeout"));
        assert!(msg.contains("not found"));
        assert!(msg.contains("abc123"));
    }

    #[test]
    fn test_commit_error_source_is_commit_failure() {
        use std::error::Error;
        let err = QbeeError::Commit {
            sha: "abc123".to_string(),
            commit: Box::new(api_error("network timeout")),
            rollback: None,
        };
        let source = err.source().unwrap();
        assert!(source.to_string().contains("network timeout"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = QbeeError::Validation("exactly one of tag or node".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_is_not_found() {
        let err = QbeeError::Api {
            method: "GET".to_string(),
            path: "/role/r1".to_string(),
            status: 404,
            code: None,
            message: String::new(),
        };
        assert!(err.is_not_found());
        assert!(!QbeeError::Auth("x".to_string()).is_not_found());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: QbeeError = json_err.into();
        match err {
            QbeeError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected QbeeError::Json"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: QbeeError = io_err.into();
        match err {
            QbeeError::Io(msg) => assert!(msg.contains("file not found")),
            _ => panic!("Expected QbeeError::Io"),
        }
    }
}
