//! JSON body extraction that answers with the crate's error bodies.

use axum::{
    extract::{FromRequest, Request, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::Error;

/// A JSON request body.
///
/// Behaves like [axum::Json] as an extractor, except that a body which is
/// missing, not valid JSON, or not the expected shape is answered with
/// status 400 and the crate's `{"error": message}` body instead of axum's
/// plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(request, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(Error::InvalidJsonBody(rejection.body_text()).into_response()),
        }
    }
}
