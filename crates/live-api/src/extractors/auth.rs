//! Session authentication extractor
//!
//! Resolves the authenticated user id from the cookie-keyed server-side
//! session. Session establishment (login) belongs to the user-management
//! flow; this extractor only verifies what that flow stored.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::response::ApiError;

/// Session key under which the user-management flow stores the user id
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Authenticated user extracted from the request session
#[derive(Debug, Clone, Copy)]
pub struct SessionUser {
    /// User id stored at login time
    pub user_id: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingSession)?;

        let user_id = session
            .get::<i64>(SESSION_USER_ID_KEY)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to read session store");
                ApiError::MissingSession
            })?
            .ok_or(ApiError::MissingSession)?;

        Ok(SessionUser { user_id })
    }
}
