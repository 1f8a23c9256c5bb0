use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use crate::models::Envelope;

pub const STORE_UNREACHABLE: &str = "Serveur introuvable";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed validation
    #[error("{0}")]
    Validation(&'static str),
    /// The targeted row does not exist. Reported as 400, like validation failures.
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::NotFound(_) => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::Validation(message) => message.to_string(),
            ApiError::NotFound(message) => message,
            ApiError::DatabaseError(err) => {
                tracing::error!("Store operation failed: {}", err);
                STORE_UNREACHABLE.to_string()
            }
        };

        let body = Json(Envelope::<()>::fail(message));

        (status, body).into_response()
    }
}
