//! Request extractors with rejections mapped to the API error envelope.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// `axum::Json` with rejections mapped to [`AppError::Validation`].
///
/// Body binding failures (malformed JSON, missing required fields, unknown
/// enum values) use the same envelope and 400 status as field validation,
/// instead of axum's default 422.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(
                "Malformed request body",
                json!({ "reason": rejection.body_text() }),
            )),
        }
    }
}
