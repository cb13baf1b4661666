use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(e) => (StatusCode::NOT_FOUND, e),
            ApiError::InvalidInput(e) => (StatusCode::BAD_REQUEST, e),
            ApiError::Conflict(e) => (StatusCode::CONFLICT, e),
            ApiError::DatabaseError(e) => {
                log::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            }
            ApiError::PoolError(e) => {
                log::error!("Connection pool error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Connection pool error: {}", e),
                )
            }
            ApiError::HashingError(e) => {
                log::error!("Hashing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Hashing error: {}", e),
                )
            }
            ApiError::SerializationError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Serialization error: {}", e),
            ),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaced_repetition_system::{ItemId, SrsError};

    #[test]
    fn scheduler_errors_map_to_client_statuses() {
        let missing: ApiError = SrsError::NotFound(ItemId(4)).into();
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let invalid: ApiError = SrsError::InvalidInput("quality".into()).into();
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn diesel_not_found_becomes_404() {
        let err: ApiError = diesel::result::Error::NotFound.into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
