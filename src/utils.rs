use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

use crate::DbPool;
use crate::data::models::{ApiError, User};
use crate::data::repositories::UserRepository;

pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub fn get_conn(pool: &DbPool) -> Result<DbConn, ApiError> {
    pool.get().map_err(|e| {
        log::error!("Failed to get DB connection: {}", e);
        ApiError::from(e)
    })
}

/// Loads the user or reports a 404
pub fn require_user(conn: &mut SqliteConnection, user_id: i32) -> Result<User, ApiError> {
    UserRepository::find_by_id(conn, user_id)?.ok_or_else(|| ApiError::not_found("User"))
}
