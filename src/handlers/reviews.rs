use std::collections::HashSet;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    data::models::{AddItemRequest, AnswerOutcome, AnswerRequest, ApiError, ImportOutcome, Wordlist},
    data::repositories::{ReviewStore, SqliteReviewStore, WordlistRepository},
    features::spelling::SpellingGrader,
    spaced_repetition_system::{
        self, ItemId, Quality, ReviewItem, ReviewStats, SequentialIds, SrsError,
    },
    utils,
};

pub async fn list_items(
    State(state): State<AppState>,
    Path(learner_id): Path<i32>,
) -> Result<Json<Vec<ReviewItem>>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let items = SqliteReviewStore::new(&mut conn).load_items(learner_id)?;
    Ok(Json(items))
}

pub async fn next_item(
    State(state): State<AppState>,
    Path(learner_id): Path<i32>,
) -> Result<Json<Option<ReviewItem>>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let items = SqliteReviewStore::new(&mut conn).load_items(learner_id)?;
    let next = spaced_repetition_system::select_next(&items, state.clock.now()).cloned();

    Ok(Json(next))
}

pub async fn stats(
    State(state): State<AppState>,
    Path(learner_id): Path<i32>,
) -> Result<Json<ReviewStats>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let items = SqliteReviewStore::new(&mut conn).load_items(learner_id)?;
    Ok(Json(spaced_repetition_system::compute_stats(
        &items,
        state.clock.now(),
    )))
}

pub async fn add_item(
    State(state): State<AppState>,
    Path(learner_id): Path<i32>,
    Json(payload): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<ReviewItem>), ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let mut store = SqliteReviewStore::new(&mut conn);
    let mut items = store.load_items(learner_id)?;
    let mut ids = SequentialIds::after(&items);

    let added = spaced_repetition_system::add_item(
        &mut items,
        &mut ids,
        &payload.content,
        payload.difficulty,
        state.clock.now(),
    )?
    .clone();

    store.save_items(learner_id, &items)?;
    Ok((StatusCode::CREATED, Json(added)))
}

pub async fn answer_item(
    State(state): State<AppState>,
    Path((learner_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<AnswerOutcome>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let item_id = ItemId(item_id);
    let mut store = SqliteReviewStore::new(&mut conn);
    let mut items = store.load_items(learner_id)?;

    let quality = match (payload.quality, payload.attempt) {
        (Some(quality), _) => Quality::try_from(quality)?,
        (None, Some(attempt)) => {
            let item = items
                .iter()
                .find(|item| item.id == item_id)
                .ok_or(SrsError::NotFound(item_id))?;
            SpellingGrader::grade(&item.content, &attempt)
        }
        (None, None) => {
            return Err(ApiError::InvalidInput(
                "Either quality or attempt is required".into(),
            ));
        }
    };

    let item =
        spaced_repetition_system::process_answer(&mut items, item_id, quality, state.clock.now())?
            .clone();

    store.save_items(learner_id, &items)?;
    log::debug!(
        "Learner {} answered item {} with quality {}, next review in {} day(s)",
        learner_id,
        item_id,
        quality.value(),
        item.interval_days
    );

    Ok(Json(AnswerOutcome {
        quality: quality.value(),
        item,
    }))
}

pub async fn reset_items(
    State(state): State<AppState>,
    Path(learner_id): Path<i32>,
) -> Result<Json<Vec<ReviewItem>>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let mut store = SqliteReviewStore::new(&mut conn);
    let mut items = store.load_items(learner_id)?;
    spaced_repetition_system::reset_all(&mut items, state.clock.now());
    store.save_items(learner_id, &items)?;

    log::info!("Reset {} review items for learner {}", items.len(), learner_id);
    Ok(Json(items))
}

/// Queues every word of a list the learner does not already study
pub async fn import_wordlist(
    State(state): State<AppState>,
    Path((learner_id, wordlist_id)): Path<(i32, i32)>,
) -> Result<Json<ImportOutcome>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let wordlist = WordlistRepository::find_by_id(&mut conn, wordlist_id)?
        .ok_or_else(|| ApiError::not_found("Wordlist"))?;
    let wordlist = Wordlist::try_from(wordlist)?;

    let mut store = SqliteReviewStore::new(&mut conn);
    let mut items = store.load_items(learner_id)?;
    let mut ids = SequentialIds::after(&items);
    let mut known: HashSet<String> = items.iter().map(|item| item.content.to_lowercase()).collect();

    let now = state.clock.now();
    let mut added = Vec::new();
    let mut skipped = 0;

    for word in &wordlist.words {
        let Some(word) = SpellingGrader::normalize_word(word) else {
            continue;
        };
        if !known.insert(word.to_lowercase()) {
            skipped += 1;
            continue;
        }
        let item = spaced_repetition_system::add_item(&mut items, &mut ids, &word, None, now)?;
        added.push(item.clone());
    }

    store.save_items(learner_id, &items)?;
    log::info!(
        "Imported {} words from list {} for learner {}",
        added.len(),
        wordlist_id,
        learner_id
    );

    Ok(Json(ImportOutcome { added, skipped }))
}
