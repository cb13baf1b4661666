use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::schema::review_items;
use crate::spaced_repetition_system::{ItemId, ReviewItem};

/// Persisted scheduling state; `position` keeps the collection order stable
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = review_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReviewItemRow {
    pub learner_id: i32,
    pub item_id: i32,
    pub position: i32,
    pub content: String,
    pub difficulty: f64,
    pub repetitions: i32,
    pub interval_days: i32,
    pub ease_factor: f64,
    pub next_review: NaiveDateTime,
    pub last_reviewed: Option<NaiveDateTime>,
    pub correct_count: i32,
    pub incorrect_count: i32,
}

impl ReviewItemRow {
    pub fn from_item(learner_id: i32, position: i32, item: &ReviewItem) -> Self {
        ReviewItemRow {
            learner_id,
            item_id: item.id.0,
            position,
            content: item.content.clone(),
            difficulty: item.difficulty,
            repetitions: item.repetitions as i32,
            interval_days: item.interval_days as i32,
            ease_factor: item.ease_factor,
            next_review: item.next_review.naive_utc(),
            last_reviewed: item.last_reviewed.map(|t| t.naive_utc()),
            correct_count: item.correct_count as i32,
            incorrect_count: item.incorrect_count as i32,
        }
    }
}

impl From<ReviewItemRow> for ReviewItem {
    fn from(row: ReviewItemRow) -> Self {
        ReviewItem {
            id: ItemId(row.item_id),
            content: row.content,
            difficulty: row.difficulty,
            repetitions: row.repetitions.max(0) as u32,
            interval_days: row.interval_days.max(1) as u32,
            ease_factor: row.ease_factor,
            next_review: row.next_review.and_utc(),
            last_reviewed: row.last_reviewed.map(|t| t.and_utc()),
            correct_count: row.correct_count.max(0) as u32,
            incorrect_count: row.incorrect_count.max(0) as u32,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub content: String,
    pub difficulty: Option<f64>,
}

/// Either a self-assessed rating or the typed spelling to grade
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub quality: Option<i32>,
    pub attempt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub quality: u8,
    pub item: ReviewItem,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub added: Vec<ReviewItem>,
    pub skipped: usize,
}
