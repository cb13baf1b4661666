use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::schema::analytics_snapshots;

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = analytics_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AnalyticsRow {
    pub user_id: i32,
    pub payload: String,
    pub updated_at: NaiveDateTime,
}

/// Dashboard data as the client charts it. Chart series are kept opaque.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub average_accuracy: f64,
    #[serde(default)]
    pub average_session_time: f64,
    #[serde(default)]
    pub mastered_words: u32,
    #[serde(default = "empty_progress")]
    pub progress_data: Value,
    #[serde(default = "empty_difficulty")]
    pub difficulty_data: Value,
    #[serde(default = "empty_sessions")]
    pub session_data: Value,
    #[serde(default = "empty_streak")]
    pub streak_data: Value,
}

impl Default for AnalyticsSnapshot {
    fn default() -> Self {
        AnalyticsSnapshot {
            total_sessions: 0,
            average_accuracy: 0.0,
            average_session_time: 0.0,
            mastered_words: 0,
            progress_data: empty_progress(),
            difficulty_data: empty_difficulty(),
            session_data: empty_sessions(),
            streak_data: empty_streak(),
        }
    }
}

fn series(labels: &[&str]) -> Value {
    let datasets: Vec<Value> = labels
        .iter()
        .map(|label| json!({ "label": label, "data": [] }))
        .collect();
    json!({ "labels": [], "datasets": datasets })
}

fn empty_progress() -> Value {
    series(&["Accuracy %", "Words Learned"])
}

fn empty_difficulty() -> Value {
    json!({ "labels": [], "datasets": [{ "data": [] }] })
}

fn empty_sessions() -> Value {
    series(&["Words Practiced", "Correct Answers"])
}

fn empty_streak() -> Value {
    series(&["Daily Streak"])
}
