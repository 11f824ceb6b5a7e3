//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use store::StoreError;
use web_types::ApiError;

/// API-layer error type
#[derive(Debug)]
pub enum AppError {
    /// 400 - Bad request (invalid input)
    BadRequest(String),

    /// 404 - No such item
    NotFound(String),

    /// 500 - Internal error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", msg),
        };

        (status, Json(ApiError::with_code(message, code))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::NotTrashed(_) => AppError::BadRequest(err.to_string()),
            StoreError::Sqlite(e) => {
                tracing::error!(error = %e, "database failure");
                AppError::Internal("Database error".into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let response = AppError::from(StoreError::NotFound(3)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::from(StoreError::NotTrashed(3)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response =
            AppError::from(StoreError::Sqlite(rusqlite_error())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn rusqlite_error() -> store::rusqlite::Error {
        store::rusqlite::Error::QueryReturnedNoRows
    }
}
