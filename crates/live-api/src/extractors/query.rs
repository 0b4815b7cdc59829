//! Listing query extractor
//!
//! Extracts the optional `limit` parameter. A value that is not a
//! non-negative integer is rejected before any query is issued; an absent
//! value means an unbounded listing.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw query parameters
#[derive(Debug, Deserialize)]
struct RawListParams {
    #[serde(default)]
    limit: Option<i64>,
}

/// Validated listing parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitQuery {
    /// Maximum number of items to return; `None` means no limit clause.
    pub limit: Option<i64>,
}

#[async_trait]
impl<S> FromRequestParts<S> for LimitQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RawListParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_query("limit query parameter must be an integer"))?;

        if let Some(limit) = params.limit {
            if limit < 0 {
                return Err(ApiError::invalid_query(
                    "limit query parameter must not be negative",
                ));
            }
        }

        Ok(LimitQuery {
            limit: params.limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<LimitQuery, ApiError> {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, ()) = request.into_parts();
        LimitQuery::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_absent_limit_is_unbounded() {
        let query = extract("/livestreams/1/reaction").await.unwrap();
        assert_eq!(query.limit, None);
    }

    #[tokio::test]
    async fn test_integer_limit_parses() {
        let query = extract("/livestreams/1/reaction?limit=2").await.unwrap();
        assert_eq!(query.limit, Some(2));
    }

    #[tokio::test]
    async fn test_non_integer_limit_is_rejected() {
        let err = extract("/livestreams/1/reaction?limit=abc").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_negative_limit_is_rejected() {
        let err = extract("/livestreams/1/reaction?limit=-1").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }
}
