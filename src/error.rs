use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid form data")]
    MalformedBody,

    #[error("Missing location")]
    MissingLocation,

    #[error("Missing review body")]
    MissingReviewBody,

    #[error("Invalid location in request body")]
    InvalidLocation,

    #[error("Invalid date filter: {0}")]
    MalformedDateFilter(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
