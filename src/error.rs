//! Error types
//!
//! Errors raised by the service clients, the session store and the
//! controller.

use thiserror::Error;

/// Errors from the remote blog and login services
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The service did not answer in time
    #[error("Request timeout")]
    Timeout,

    /// The service answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Whether the service rejected the caller's credentials or token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ServiceError::Status { status: 401, .. })
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout
        } else if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Network(err.to_string())
        }
    }
}

/// Errors from a session store backend
#[derive(Error, Debug)]
pub enum SessionError {
    /// The backing storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// The stored record is not a valid user
    #[error("Corrupt session record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Storage(err.to_string())
    }
}

/// Errors returned by controller operations
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// The id does not name a blog in the current list
    #[error("Blog not found: {0}")]
    BlogNotFound(String),

    /// The operation needs a logged-in user
    #[error("Not logged in")]
    NotAuthenticated,
}

/// Result type alias for controller operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::BlogNotFound("b1".to_string());
        assert_eq!(err.to_string(), "Blog not found: b1");

        let err: AppError = ServiceError::Status {
            status: 401,
            message: "invalid username or password".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "API error 401: invalid username or password");
    }

    #[test]
    fn test_unauthorized() {
        let err = ServiceError::Status {
            status: 401,
            message: String::new(),
        };
        assert!(err.is_unauthorized());
        assert!(!ServiceError::Timeout.is_unauthorized());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SessionError = io_err.into();
        assert!(matches!(err, SessionError::Storage(_)));
    }
}
