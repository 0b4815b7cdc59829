//! Strict JSON body extractor
//!
//! Any body rejection (missing content type, syntax error, wrong shape) maps
//! to the API's bad-request body instead of the framework's mixed rejection
//! statuses.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// JSON body that rejects with 400 on any deserialization failure
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;

        Ok(StrictJson(value))
    }
}
