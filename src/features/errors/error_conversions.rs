use bcrypt::BcryptError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde_json::Error as JsonError;
use validator::ValidationErrors;

use crate::data::models::ApiError;

impl From<DieselError> for ApiError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => ApiError::NotFound("Record not found".into()),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ApiError::Conflict("Record already exists".into())
            }
            other => ApiError::DatabaseError(other),
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::PoolError(err.to_string())
    }
}

impl From<BcryptError> for ApiError {
    fn from(err: BcryptError) -> Self {
        ApiError::HashingError(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<JsonError> for ApiError {
    fn from(err: JsonError) -> Self {
        ApiError::SerializationError(err.to_string())
    }
}
