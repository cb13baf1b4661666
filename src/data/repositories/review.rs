use diesel::prelude::*;

use crate::data::models::ReviewItemRow;
use crate::schema::review_items;
use crate::spaced_repetition_system::ReviewItem;

/// Loads and saves one learner's whole review collection.
///
/// Callers load, run the scheduler on the in-memory snapshot, then save.
pub trait ReviewStore {
    fn load_items(&mut self, learner_id: i32) -> Result<Vec<ReviewItem>, diesel::result::Error>;

    fn save_items(
        &mut self,
        learner_id: i32,
        items: &[ReviewItem],
    ) -> Result<(), diesel::result::Error>;
}

pub struct SqliteReviewStore<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> SqliteReviewStore<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        SqliteReviewStore { conn }
    }
}

impl ReviewStore for SqliteReviewStore<'_> {
    fn load_items(&mut self, learner_id: i32) -> Result<Vec<ReviewItem>, diesel::result::Error> {
        let rows = review_items::table
            .filter(review_items::learner_id.eq(learner_id))
            .order(review_items::position.asc())
            .select(ReviewItemRow::as_select())
            .load(&mut *self.conn)?;

        Ok(rows.into_iter().map(ReviewItem::from).collect())
    }

    /// Replaces the stored collection atomically, keeping the given order
    fn save_items(
        &mut self,
        learner_id: i32,
        items: &[ReviewItem],
    ) -> Result<(), diesel::result::Error> {
        let rows: Vec<ReviewItemRow> = items
            .iter()
            .enumerate()
            .map(|(position, item)| ReviewItemRow::from_item(learner_id, position as i32, item))
            .collect();

        self.conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(review_items::table.filter(review_items::learner_id.eq(learner_id)))
                .execute(conn)?;

            if !rows.is_empty() {
                diesel::insert_into(review_items::table)
                    .values(&rows)
                    .execute(conn)?;
            }
            Ok(())
        })
    }
}
