use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ServerError;

pub(crate) mod repair;
pub(crate) mod user;
pub(crate) mod vehicle;

pub(crate) use repair::*;
pub(crate) use user::*;
pub(crate) use vehicle::*;

/// A JSON request body.
///
/// Unlike a bare `Json`, a missing field or malformed body is rejected as a `ServerError`, so every
/// client mistake surfaces as `400 Bad Request`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct JsonInput<T>(pub(crate) T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonInput(value))
    }
}
