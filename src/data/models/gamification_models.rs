use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::schema::gamification_profiles;

/// Persisted profile; `badges` holds a JSON array of `EarnedBadge`
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = gamification_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GamificationRow {
    pub learner_id: i32,
    pub points: i32,
    pub level: i32,
    pub experience: i32,
    pub experience_to_next: i32,
    pub badges: String,
}

#[derive(Debug, Deserialize)]
pub struct AddPointsRequest {
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub learner_id: i32,
    pub name: String,
    pub points: i64,
    pub level: u32,
}
