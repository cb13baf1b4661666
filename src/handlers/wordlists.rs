use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    AppState,
    data::models::{
        ApiError, CreateWordlistRequest, NewWordlist, UpdateWordlistRequest, Wordlist,
    },
    data::repositories::WordlistRepository,
    features::spelling::SpellingGrader,
    utils,
};

fn clean_words(words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter_map(|word| SpellingGrader::normalize_word(word))
        .collect()
}

pub async fn list_wordlists(
    State(state): State<AppState>,
) -> Result<Json<Vec<Wordlist>>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    let wordlists = WordlistRepository::list(&mut conn)?
        .into_iter()
        .map(Wordlist::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(wordlists))
}

pub async fn get_wordlist(
    State(state): State<AppState>,
    Path(wordlist_id): Path<i32>,
) -> Result<Json<Wordlist>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    let row = WordlistRepository::find_by_id(&mut conn, wordlist_id)?
        .ok_or_else(|| ApiError::not_found("Wordlist"))?;

    Ok(Json(Wordlist::try_from(row)?))
}

pub async fn create_wordlist(
    State(state): State<AppState>,
    Json(payload): Json<CreateWordlistRequest>,
) -> Result<(StatusCode, Json<Wordlist>), ApiError> {
    payload.validate()?;

    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, payload.created_by)?;

    let created_at = payload.created_at.unwrap_or_else(|| state.clock.now());
    let row = WordlistRepository::create(
        &mut conn,
        &NewWordlist {
            name: &payload.name,
            description: payload.description.as_deref(),
            words: serde_json::to_string(&clean_words(&payload.words))?,
            assigned_students: serde_json::to_string(&payload.assigned_students)?,
            created_by: payload.created_by,
            created_at: created_at.naive_utc(),
        },
    )?;

    log::info!("Created word list {} by user {}", row.wordlist_id, row.created_by);
    Ok((StatusCode::CREATED, Json(Wordlist::try_from(row)?)))
}

pub async fn update_wordlist(
    State(state): State<AppState>,
    Path(wordlist_id): Path<i32>,
    Json(payload): Json<UpdateWordlistRequest>,
) -> Result<Json<Wordlist>, ApiError> {
    payload.validate()?;

    let mut conn = utils::get_conn(&state.pool)?;
    let changed = WordlistRepository::update(
        &mut conn,
        wordlist_id,
        &payload.name,
        payload.description.as_deref(),
        &serde_json::to_string(&clean_words(&payload.words))?,
        &serde_json::to_string(&payload.assigned_students)?,
    )?;
    if changed == 0 {
        return Err(ApiError::not_found("Wordlist"));
    }

    let row = WordlistRepository::find_by_id(&mut conn, wordlist_id)?
        .ok_or_else(|| ApiError::not_found("Wordlist"))?;
    Ok(Json(Wordlist::try_from(row)?))
}

pub async fn delete_wordlist(
    State(state): State<AppState>,
    Path(wordlist_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;

    if WordlistRepository::delete(&mut conn, wordlist_id)? == 0 {
        return Err(ApiError::not_found("Wordlist"));
    }
    Ok(StatusCode::NO_CONTENT)
}
