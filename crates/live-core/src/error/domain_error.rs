//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Theme not found for user: {0}")]
    ThemeNotFound(i64),

    #[error("Livestream not found: {0}")]
    LivestreamNotFound(i64),

    // =========================================================================
    // Data Integrity
    // =========================================================================
    /// A bulk lookup was missing a row that foreign-key discipline says must
    /// exist. Unlike an absent icon hash this is never valid, so the whole
    /// assembly fails instead of emitting a zero-valued entry.
    #[error("Missing required {entity} row for id {id}")]
    RelationMissing { entity: &'static str, id: i64 },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ThemeNotFound(_) => "UNKNOWN_THEME",
            Self::LivestreamNotFound(_) => "UNKNOWN_LIVESTREAM",
            Self::RelationMissing { .. } => "DATA_INTEGRITY",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ThemeNotFound(_) | Self::LivestreamNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(DomainError::UserNotFound(1).is_not_found());
        assert!(DomainError::LivestreamNotFound(2).is_not_found());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_not_found());
        assert!(!DomainError::RelationMissing { entity: "theme", id: 3 }.is_not_found());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::UserNotFound(1).code(), "UNKNOWN_USER");
        assert_eq!(
            DomainError::RelationMissing { entity: "user", id: 9 }.code(),
            "DATA_INTEGRITY"
        );
    }

    #[test]
    fn test_display_includes_id() {
        let err = DomainError::LivestreamNotFound(42);
        assert!(err.to_string().contains("42"));
    }
}
