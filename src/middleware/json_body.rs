use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::{ApiException, AppError};

/// Typed JSON body that treats an empty payload as `T::default()`.
///
/// Unlike `axum::Json`, no `Content-Type` header is required. Bodies that are
/// present but not valid JSON for `T` are rejected with an [`ApiException`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiException::new(rejection.body_text(), rejection.status()))?;

        parse_body(&bytes).map(JsonBody)
    }
}

pub fn parse_body<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(bytes).map_err(|err| {
        ApiException::bad_request(format!("Invalid JSON body: {err}")).into()
    })
}
