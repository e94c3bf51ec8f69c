//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::Json;
use sara_core::error::CoreError;
use sara_db::models::user::{UpsertUser, User};
use sara_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(state.store().await).await?;
    Ok(Json(users))
}

/// POST /api/users
///
/// Creates the user or refreshes an existing profile in place.
pub async fn upsert(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<UpsertUser>,
) -> AppResult<Json<User>> {
    let profile = input.validate()?;
    let user = UserRepo::upsert(state.store().await, &profile).await?;
    Ok(Json(user))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(state.store().await, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(user))
}
