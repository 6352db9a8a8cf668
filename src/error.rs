use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

use crate::schemas::ErrorResponse;

/// Failure of one of the read queries behind the API.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl QueryError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        QueryError::NotFound {
            entity,
            key: key.into(),
        }
    }
}

/// Error returned by handlers, rendered as an [`ErrorResponse`] body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
            }
            QueryError::Database(ref db_error) => {
                error!("Database error while serving request: {}", db_error);
                ApiError::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Failed to read dashboard data",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
            code: self.code.to_string(),
            success: false,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = QueryError::not_found("Municipality", "13999").into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "NOT_FOUND");
        assert_eq!(err.message, "Municipality '13999' not found");
    }

    #[test]
    fn test_database_error_hides_details() {
        let err: ApiError =
            QueryError::Database(sea_orm::DbErr::Custom("disk I/O error".to_string())).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code, "DATABASE_ERROR");
        assert!(!err.message.contains("disk"));
    }
}
