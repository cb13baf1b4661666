use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    AppState,
    data::models::{ApiError, CreateUserRequest, UpdateUserRequest, UserProfile},
    data::repositories::UserRepository,
    utils,
};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserProfile>>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    let users = UserRepository::list(&mut conn)?
        .into_iter()
        .map(UserProfile::from)
        .collect();

    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserProfile>, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;
    let user = utils::require_user(&mut conn, user_id)?;

    Ok(Json(user.into()))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserProfile>), ApiError> {
    payload.validate()?;

    let mut conn = utils::get_conn(&state.pool)?;

    if UserRepository::email_exists(&mut conn, &payload.email)? {
        return Err(ApiError::Conflict("Email already exists".into()));
    }

    let password_hash = UserRepository::hash_password(&payload.password)?;
    let user = UserRepository::create_user(
        &mut conn,
        &payload.email,
        &payload.name,
        payload.role,
        &password_hash,
        state.clock.now().naive_utc(),
    )?;

    log::info!("Created user {} ({})", user.user_id, user.role);
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    payload.validate()?;

    let mut conn = utils::get_conn(&state.pool)?;

    if let Some(existing) = UserRepository::find_by_email(&mut conn, &payload.email)? {
        if existing.user_id != user_id {
            return Err(ApiError::Conflict("Email already exists".into()));
        }
    }

    let changed = UserRepository::update_user(
        &mut conn,
        user_id,
        &payload.email,
        &payload.name,
        payload.role,
    )?;
    if changed == 0 {
        return Err(ApiError::not_found("User"));
    }

    let user = utils::require_user(&mut conn, user_id)?;
    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let mut conn = utils::get_conn(&state.pool)?;

    if UserRepository::delete_user(&mut conn, user_id)? == 0 {
        return Err(ApiError::not_found("User"));
    }

    log::info!("Deleted user {}", user_id);
    Ok(StatusCode::NO_CONTENT)
}
