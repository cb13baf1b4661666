use diesel::prelude::*;

use crate::data::models::GamificationRow;
use crate::schema::{gamification_profiles, users};

pub struct GamificationRepository;

impl GamificationRepository {
    pub fn find(
        conn: &mut SqliteConnection,
        learner_id: i32,
    ) -> Result<Option<GamificationRow>, diesel::result::Error> {
        gamification_profiles::table
            .find(learner_id)
            .select(GamificationRow::as_select())
            .first(conn)
            .optional()
    }

    pub fn save(
        conn: &mut SqliteConnection,
        row: &GamificationRow,
    ) -> Result<(), diesel::result::Error> {
        diesel::replace_into(gamification_profiles::table)
            .values(row)
            .execute(conn)?;
        Ok(())
    }

    /// (learner id, name, points, level) ordered by points, highest first
    pub fn leaderboard(
        conn: &mut SqliteConnection,
    ) -> Result<Vec<(i32, String, i32, i32)>, diesel::result::Error> {
        gamification_profiles::table
            .inner_join(users::table)
            .select((
                gamification_profiles::learner_id,
                users::name,
                gamification_profiles::points,
                gamification_profiles::level,
            ))
            .order((
                gamification_profiles::points.desc(),
                gamification_profiles::learner_id.asc(),
            ))
            .load(conn)
    }
}
