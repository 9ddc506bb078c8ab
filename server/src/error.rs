//! Mapping from handler failures to HTTP responses.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), error = %self, "request rejected");
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => AppError::NotFound(id),
        }
    }
}

/// Every way a JSON body can be unusable (absent, wrong content type,
/// malformed, wrong shape) is a 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// `axum::Json` with its rejections folded into `AppError::BadRequest`.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound(2).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("missing body".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn repository_not_found_keeps_id() {
        let err = AppError::from(RepositoryError::NotFound(9));
        assert_eq!(err, AppError::NotFound(9));
        assert_eq!(err.to_string(), "todo 9 not found");
    }
}
