use bcrypt::hash;
use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::data::models::{NewUser, Role, User};
use crate::schema::{analytics_snapshots, gamification_profiles, review_items, users};

/// Work factor for stored password hashes
pub const BCRYPT_COST: u32 = 10;

pub struct UserRepository;

impl UserRepository {
    pub fn list(conn: &mut SqliteConnection) -> Result<Vec<User>, diesel::result::Error> {
        users::table
            .order(users::user_id.asc())
            .select(User::as_select())
            .load(conn)
    }

    pub fn find_by_id(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Option<User>, diesel::result::Error> {
        users::table
            .find(user_id)
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_by_email(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> Result<Option<User>, diesel::result::Error> {
        users::table
            .filter(users::email.eq(email))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        hash(password, BCRYPT_COST)
    }

    pub fn create_user(
        conn: &mut SqliteConnection,
        email: &str,
        name: &str,
        role: Role,
        password_hash: &str,
        created_at: NaiveDateTime,
    ) -> Result<User, diesel::result::Error> {
        diesel::insert_into(users::table)
            .values(&NewUser {
                email,
                name,
                role: role.as_str(),
                password_hash,
                created_at,
            })
            .execute(conn)?;

        users::table
            .filter(users::email.eq(email))
            .select(User::as_select())
            .first(conn)
    }

    /// Returns the number of rows changed, 0 when the user does not exist
    pub fn update_user(
        conn: &mut SqliteConnection,
        user_id: i32,
        email: &str,
        name: &str,
        role: Role,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(users::table.find(user_id))
            .set((
                users::email.eq(email),
                users::name.eq(name),
                users::role.eq(role.as_str()),
            ))
            .execute(conn)
    }

    /// Removes the user together with their review queue, profile and analytics
    pub fn delete_user(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(review_items::table.filter(review_items::learner_id.eq(user_id)))
                .execute(conn)?;
            diesel::delete(gamification_profiles::table.find(user_id)).execute(conn)?;
            diesel::delete(analytics_snapshots::table.find(user_id)).execute(conn)?;
            diesel::delete(users::table.find(user_id)).execute(conn)
        })
    }

    pub fn email_exists(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> Result<bool, diesel::result::Error> {
        use diesel::dsl::exists;
        use diesel::select;

        select(exists(users::table.filter(users::email.eq(email)))).get_result(conn)
    }

    pub fn count(conn: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
        users::table.count().get_result(conn)
    }
}
