use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::{de::DeserializeOwned, de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ApiError;

/// JSON request body where a missing body, an empty body or a non-JSON
/// content type all read as `{}`, so field validation still runs.
pub struct PhotoBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for PhotoBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim_start().starts_with("application/json"))
            .unwrap_or(false);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_json(rejection.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(PhotoBody(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(PhotoBody)
            .map_err(|err| ApiError::invalid_json(format!("Invalid JSON body: {}", err)))
    }
}

/// Text field that also accepts numbers and booleans, stored as their
/// string form. `null` reads as absent.
pub fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!("expected a string, found {}", other))),
    }
}
