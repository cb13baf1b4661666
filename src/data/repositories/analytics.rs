use diesel::prelude::*;

use crate::data::models::AnalyticsRow;
use crate::schema::analytics_snapshots;

pub struct AnalyticsRepository;

impl AnalyticsRepository {
    pub fn find(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Option<AnalyticsRow>, diesel::result::Error> {
        analytics_snapshots::table
            .find(user_id)
            .select(AnalyticsRow::as_select())
            .first(conn)
            .optional()
    }

    pub fn save(conn: &mut SqliteConnection, row: &AnalyticsRow) -> Result<(), diesel::result::Error> {
        diesel::replace_into(analytics_snapshots::table)
            .values(row)
            .execute(conn)?;
        Ok(())
    }

    pub fn delete(conn: &mut SqliteConnection, user_id: i32) -> Result<usize, diesel::result::Error> {
        diesel::delete(analytics_snapshots::table.find(user_id)).execute(conn)
    }
}
