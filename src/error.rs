use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("No home directory found for client storage")]
    NoHomeDir,

    #[error("Failed to read storage {path}: {source}")]
    StorageRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write storage {path}: {source}")]
    StorageWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("Corrupt storage file {path}: {source}")]
    StorageFormat {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid API URL \"{input}\" (expected http:// or https://)")]
    InvalidApiUrl { input: String },

    #[error("Failed to read password: {0}")]
    PasswordInput(std::io::Error),

    #[error("Project {id} not found")]
    ProjectNotFound { id: i64 },
}

/// Failure of a single API round trip. Callers present every variant the same way.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {code}")]
    Status { code: u16 },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => ApiError::Status { code },
            ureq::Error::Json(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("Project name is required")]
    MissingName,

    #[error("Fill in both the mail username and the mail password, or leave both empty.")]
    PartialMailCredentials,
}

#[derive(Debug, Error)]
pub(crate) enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_api_url() {
        let e = AppError::InvalidApiUrl {
            input: "ftp://x".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid API URL "ftp://x" (expected http:// or https://)"#
        );
    }

    #[test]
    fn app_error_display_project_not_found() {
        let e = AppError::ProjectNotFound { id: 7 };
        assert_eq!(e.to_string(), "Project 7 not found");
    }

    #[test]
    fn api_error_status() {
        let e = ApiError::Status { code: 401 };
        assert_eq!(e.to_string(), "server responded with status 401");
    }

    #[test]
    fn api_error_from_status_code() {
        let e: ApiError = ureq::Error::StatusCode(500).into();
        assert!(matches!(e, ApiError::Status { code: 500 }));
    }

    #[test]
    fn validation_error_partial_mail() {
        assert_eq!(
            ValidationError::PartialMailCredentials.to_string(),
            "Fill in both the mail username and the mail password, or leave both empty."
        );
    }
}
