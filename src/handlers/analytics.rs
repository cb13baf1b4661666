use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};

use crate::{
    AppState,
    data::models::{AnalyticsRow, AnalyticsSnapshot, ApiError},
    data::repositories::AnalyticsRepository,
    utils,
};

pub async fn get_analytics(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<AnalyticsSnapshot>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, user_id)?;

    let snapshot = match AnalyticsRepository::find(&mut conn, user_id)? {
        Some(row) => serde_json::from_str(&row.payload)?,
        None => AnalyticsSnapshot::default(),
    };

    Ok(Json(snapshot))
}

pub async fn save_analytics(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(snapshot): Json<AnalyticsSnapshot>,
) -> Result<Json<AnalyticsSnapshot>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, user_id)?;

    AnalyticsRepository::save(
        &mut conn,
        &AnalyticsRow {
            user_id,
            payload: serde_json::to_string(&snapshot)?,
            updated_at: state.clock.now().naive_utc(),
        },
    )?;

    Ok(Json(snapshot))
}

pub async fn reset_analytics(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, user_id)?;

    AnalyticsRepository::delete(&mut conn, user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
