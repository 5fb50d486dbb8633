//! Extractors that validate request shape before a handler runs.
//!
//! Both wrap axum's own extractors and turn their rejections into
//! [`AppError::ValidationFailure`], so every malformed path or body gets the
//! same 422 response.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::header,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Location};

/// Typed path parameters. Use a struct with named fields so a failure can
/// report which parameter was bad.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);

/// Typed JSON request body.
///
/// A body sent without any `Content-Type` is still decoded as JSON; a body
/// declaring some other content type is rejected.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(Location::Body, e.body_text()))?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}
