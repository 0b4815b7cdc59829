//! Typed path extractors
//!
//! Parse failures produce the API's own bad-request body instead of the
//! framework default rejection.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Livestream id parsed from the `:livestream_id` path segment
#[derive(Debug, Clone, Copy)]
pub struct LivestreamIdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for LivestreamIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_path("livestream_id in path must be an integer"))?;

        let id = raw
            .parse::<i64>()
            .map_err(|_| ApiError::invalid_path("livestream_id in path must be an integer"))?;

        Ok(LivestreamIdPath(id))
    }
}
