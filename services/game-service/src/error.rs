use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::ServiceError;

use crate::store::StoreError;
use crate::types::ErrorResponse;

/// Wraps [`ServiceError`] so it can be returned from axum handlers.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl ApiError {
    pub fn store(message: &str, err: StoreError) -> Self {
        ApiError(ServiceError::Internal {
            message: message.to_string(),
            error: err.to_string(),
        })
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            ServiceError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse { message, error: None },
            ),
            ServiceError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse { message, error: None },
            ),
            ServiceError::Internal { message, error } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    message,
                    error: Some(error),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
