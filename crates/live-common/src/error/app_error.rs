//! Application error type shared above the domain layer

use live_core::DomainError;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No usable session accompanied the request
    #[error("Missing or invalid session")]
    MissingSession,

    /// Rejected input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A named resource does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Persistence failure, wrapping the underlying cause message
    #[error("Database error: {0}")]
    Database(String),

    /// Anything unexpected; the cause is kept for diagnostics only
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    /// Domain error bubbling up unchanged
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Bad or missing configuration at startup
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status code this error maps to
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingSession => 401,
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_validation() => 400,
            Self::Domain(_) => 500,
        }
    }

    /// Stable error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSession => "MISSING_SESSION",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Whether this maps to a 4xx response
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Whether this maps to a 5xx response
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Not-found error for a named resource
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Validation error from any displayable message
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Internal error wrapping any cause
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::MissingSession.status_code(), 401);
        assert_eq!(AppError::not_found("user").status_code(), 404);
        assert_eq!(AppError::validation("bad").status_code(), 400);
        assert_eq!(AppError::Database("down".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_error_mapping() {
        let err = AppError::Domain(DomainError::UserNotFound(7));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_USER");

        let err = AppError::Domain(DomainError::RelationMissing { entity: "theme", id: 7 });
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_client_server_split() {
        assert!(AppError::MissingSession.is_client_error());
        assert!(!AppError::MissingSession.is_server_error());
        assert!(AppError::Database("x".to_string()).is_server_error());
    }
}
