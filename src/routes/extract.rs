use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::models::Error;

/// JSON body that has been deserialized and passed its `Validate` rules.
///
/// Any rejection (bad JSON, missing field, wrong content type, constraint
/// violation) is answered with 400 and an `{"error": ...}` body.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| Error::new(StatusCode::BAD_REQUEST, &rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Employee id taken from the `:id` path segment.
///
/// Undecodable segments and anything but a positive integer are answered
/// with 400 and an `{"error": ...}` body.
pub struct EmployeeId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::new(StatusCode::BAD_REQUEST, &rejection.body_text()))?;
        parse_id(&raw).map(EmployeeId)
    }
}

/// Parses an `:id` path segment; only positive integers name an employee
pub fn parse_id(raw: &str) -> Result<i32, Error> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::new(StatusCode::BAD_REQUEST, "invalid employee id")),
    }
}
