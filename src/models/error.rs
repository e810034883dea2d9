use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tracing::error;
use validator::ValidationErrors;

use super::dto::ErrorMessage;
use crate::database::RepositoryError;

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<ErrorMessage>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(ErrorMessage::new(message)),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        if err.is_not_found() {
            return Self::new(StatusCode::NOT_FOUND, &err.to_string());
        }
        error!("{err}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::new(StatusCode::BAD_REQUEST, &errors.to_string())
    }
}
