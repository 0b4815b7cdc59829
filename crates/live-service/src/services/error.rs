//! Service layer error types

use live_core::DomainError;
use thiserror::Error;

/// Error type shared by all service operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation or failed lookup
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Persistence failure outside the loader (begin/commit)
    #[error("Database error: {0}")]
    Database(String),

    /// Resource not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status code this error maps to at the request boundary
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_validation() => 400,
            Self::Domain(_) => 500,
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Stable error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::not_found("Livestream", "123");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.to_string().contains("Livestream not found: 123"));
    }

    #[test]
    fn test_domain_not_found_maps_to_404() {
        let err = ServiceError::from(DomainError::UserNotFound(9));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_USER");
    }

    #[test]
    fn test_data_integrity_maps_to_500() {
        let err = ServiceError::from(DomainError::RelationMissing { entity: "user", id: 9 });
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_database_error() {
        let err = ServiceError::Database("connection reset".to_string());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}
