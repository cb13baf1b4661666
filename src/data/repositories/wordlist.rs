use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::{NewWordlist, WordlistRow};
use crate::schema::wordlists;

pub struct WordlistRepository;

impl WordlistRepository {
    pub fn list(conn: &mut SqliteConnection) -> Result<Vec<WordlistRow>, diesel::result::Error> {
        wordlists::table
            .order(wordlists::wordlist_id.asc())
            .select(WordlistRow::as_select())
            .load(conn)
    }

    pub fn find_by_id(
        conn: &mut SqliteConnection,
        wordlist_id: i32,
    ) -> Result<Option<WordlistRow>, diesel::result::Error> {
        wordlists::table
            .find(wordlist_id)
            .select(WordlistRow::as_select())
            .first(conn)
            .optional()
    }

    pub fn create(
        conn: &mut SqliteConnection,
        wordlist: &NewWordlist,
    ) -> Result<WordlistRow, diesel::result::Error> {
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(wordlists::table)
                .values(wordlist)
                .execute(conn)?;

            let wordlist_id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                .get_result::<i32>(conn)?;

            wordlists::table
                .find(wordlist_id)
                .select(WordlistRow::as_select())
                .first(conn)
        })
    }

    pub fn update(
        conn: &mut SqliteConnection,
        wordlist_id: i32,
        name: &str,
        description: Option<&str>,
        words: &str,
        assigned_students: &str,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(wordlists::table.find(wordlist_id))
            .set((
                wordlists::name.eq(name),
                wordlists::description.eq(description),
                wordlists::words.eq(words),
                wordlists::assigned_students.eq(assigned_students),
            ))
            .execute(conn)
    }

    pub fn delete(
        conn: &mut SqliteConnection,
        wordlist_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(wordlists::table.find(wordlist_id)).execute(conn)
    }
}
