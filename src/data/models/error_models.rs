use bcrypt::BcryptError;
use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::spaced_repetition_system::SrsError;

// Errors surfaced by the JSON API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Database error")]
    DatabaseError(DieselError),
    #[error("Connection pool error: {0}")]
    PoolError(String),
    #[error("Hashing error")]
    HashingError(BcryptError),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ApiError {
    pub fn not_found(what: &str) -> Self {
        ApiError::NotFound(format!("{} not found", what))
    }
}

// Scheduler errors keep their own meaning on the wire
impl From<SrsError> for ApiError {
    fn from(err: SrsError) -> Self {
        match err {
            SrsError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SrsError::InvalidInput(message) => ApiError::InvalidInput(message),
        }
    }
}
