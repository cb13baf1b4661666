use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use crate::DbPool;

const CREATE_TABLES: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        user_id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT UNIQUE NOT NULL,
        name TEXT NOT NULL,
        role TEXT NOT NULL CHECK (role IN ('admin', 'teacher', 'student')),
        password_hash TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS wordlists (
        wordlist_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT,
        words TEXT NOT NULL,
        assigned_students TEXT NOT NULL,
        created_by INTEGER NOT NULL REFERENCES users (user_id),
        created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS review_items (
        learner_id INTEGER NOT NULL REFERENCES users (user_id),
        item_id INTEGER NOT NULL,
        position INTEGER NOT NULL,
        content TEXT NOT NULL,
        difficulty DOUBLE NOT NULL,
        repetitions INTEGER NOT NULL,
        interval_days INTEGER NOT NULL,
        ease_factor DOUBLE NOT NULL,
        next_review TIMESTAMP NOT NULL,
        last_reviewed TIMESTAMP,
        correct_count INTEGER NOT NULL,
        incorrect_count INTEGER NOT NULL,
        PRIMARY KEY (learner_id, item_id)
    );

    CREATE TABLE IF NOT EXISTS gamification_profiles (
        learner_id INTEGER PRIMARY KEY NOT NULL REFERENCES users (user_id),
        points INTEGER NOT NULL,
        level INTEGER NOT NULL,
        experience INTEGER NOT NULL,
        experience_to_next INTEGER NOT NULL,
        badges TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS analytics_snapshots (
        user_id INTEGER PRIMARY KEY NOT NULL REFERENCES users (user_id),
        payload TEXT NOT NULL,
        updated_at TIMESTAMP NOT NULL
    );
"#;

pub fn create_pool(database_url: &str) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}

/// Creates any missing tables
pub fn initialize(conn: &mut SqliteConnection) -> Result<(), diesel::result::Error> {
    conn.batch_execute(CREATE_TABLES)
}
