use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ApiError;

/// JSON body decoded from the raw bytes, whatever the `Content-Type`.
///
/// Any read or decode failure is a 400 in the usual error envelope, unlike
/// `axum::Json` which answers 415/422 for some of them.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read request body: {e}")))?;
        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            debug!(error = %e, "request body rejected");
            ApiError::bad_request(format!("failed to decode request body: {e}"))
        })
    }
}
