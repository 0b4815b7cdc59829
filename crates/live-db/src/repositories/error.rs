//! Error handling utilities for the loader implementation

use live_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert a SQLx error to a DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "theme not found" error (themes are keyed by owning user)
pub fn theme_not_found(user_id: i64) -> DomainError {
    DomainError::ThemeNotFound(user_id)
}

/// Create a "livestream not found" error
pub fn livestream_not_found(id: i64) -> DomainError {
    DomainError::LivestreamNotFound(id)
}
