use axum::extract::{Json, Path, State};
use diesel::SqliteConnection;

use crate::{
    AppState,
    data::models::{AddPointsRequest, ApiError, LeaderboardEntry},
    data::repositories::GamificationRepository,
    features::gamification::{GamificationProfile, MAX_POINTS, ProfileView, find_badge},
    utils,
};

fn load_profile(
    conn: &mut SqliteConnection,
    learner_id: i32,
) -> Result<GamificationProfile, ApiError> {
    match GamificationRepository::find(conn, learner_id)? {
        Some(row) => Ok(GamificationProfile::from_row(&row)?),
        None => Ok(GamificationProfile::default()),
    }
}

fn save_profile(
    conn: &mut SqliteConnection,
    learner_id: i32,
    profile: &GamificationProfile,
) -> Result<(), ApiError> {
    GamificationRepository::save(conn, &profile.to_row(learner_id)?)?;
    Ok(())
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(learner_id): Path<i32>,
) -> Result<Json<ProfileView>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    Ok(Json(load_profile(&mut conn, learner_id)?.view()))
}

pub async fn add_points(
    State(state): State<AppState>,
    Path(learner_id): Path<i32>,
    Json(payload): Json<AddPointsRequest>,
) -> Result<Json<ProfileView>, ApiError> {
    if !(0..=MAX_POINTS).contains(&payload.amount) {
        return Err(ApiError::InvalidInput(format!(
            "Points amount must be between 0 and {}",
            MAX_POINTS
        )));
    }

    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let mut profile = load_profile(&mut conn, learner_id)?;
    let level_before = profile.level;
    profile.add_points(payload.amount);
    save_profile(&mut conn, learner_id, &profile)?;

    if profile.level > level_before {
        log::info!("Learner {} reached level {}", learner_id, profile.level);
    }
    Ok(Json(profile.view()))
}

pub async fn earn_badge(
    State(state): State<AppState>,
    Path((learner_id, badge_id)): Path<(i32, String)>,
) -> Result<Json<ProfileView>, ApiError> {
    let badge = find_badge(&badge_id).ok_or_else(|| ApiError::not_found("Badge"))?;

    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let mut profile = load_profile(&mut conn, learner_id)?;
    if profile.earn_badge(badge, state.clock.now()) {
        save_profile(&mut conn, learner_id, &profile)?;
        log::info!("Learner {} earned badge {}", learner_id, badge.id);
    }

    Ok(Json(profile.view()))
}

pub async fn reset_profile(
    State(state): State<AppState>,
    Path(learner_id): Path<i32>,
) -> Result<Json<ProfileView>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    utils::require_user(&mut conn, learner_id)?;

    let mut profile = load_profile(&mut conn, learner_id)?;
    profile.reset();
    save_profile(&mut conn, learner_id, &profile)?;

    Ok(Json(profile.view()))
}

pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    let entries = GamificationRepository::leaderboard(&mut conn)?
        .into_iter()
        .map(|(learner_id, name, points, level)| LeaderboardEntry {
            learner_id,
            name,
            points: points as i64,
            level: level.max(1) as u32,
        })
        .collect();

    Ok(Json(entries))
}
