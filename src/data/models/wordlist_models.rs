use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::wordlists;

/// Word list row; `words` and `assigned_students` hold JSON arrays
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = wordlists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WordlistRow {
    pub wordlist_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub words: String,
    pub assigned_students: String,
    pub created_by: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = wordlists)]
pub struct NewWordlist<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub words: String,
    pub assigned_students: String,
    pub created_by: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Wordlist {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub words: Vec<String>,
    pub assigned_students: Vec<i32>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<WordlistRow> for Wordlist {
    type Error = serde_json::Error;

    fn try_from(row: WordlistRow) -> Result<Self, Self::Error> {
        Ok(Wordlist {
            id: row.wordlist_id,
            name: row.name,
            description: row.description,
            words: serde_json::from_str(&row.words)?,
            assigned_students: serde_json::from_str(&row.assigned_students)?,
            created_by: row.created_by,
            created_at: row.created_at.and_utc(),
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWordlistRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub assigned_students: Vec<i32>,
    pub created_by: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWordlistRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub assigned_students: Vec<i32>,
}
