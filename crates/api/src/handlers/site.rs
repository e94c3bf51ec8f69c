//! Handlers for the `/sites` resource and demo seeding.

use axum::extract::{Path, State};
use axum::Json;
use sara_core::error::CoreError;
use sara_db::models::site::{CreateSite, JoinSite, Site};
use sara_db::models::user::User;
use sara_db::repositories::{SiteRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::{JoinResponse, SeedResponse};
use crate::state::AppState;

/// GET /api/sites
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Site>>> {
    let sites = SiteRepo::list(state.store().await).await?;
    Ok(Json(sites))
}

/// POST /api/sites
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateSite>,
) -> AppResult<Json<Site>> {
    let input = input.validate()?;
    let site = SiteRepo::create(state.store().await, &input).await?;
    Ok(Json(site))
}

/// GET /api/sites/code/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Site>> {
    let site = SiteRepo::find_by_code(state.store().await, &code)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Site", code)))?;
    Ok(Json(site))
}

/// GET /api/sites/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Site>> {
    let site = SiteRepo::find_by_id(state.store().await, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Site", id)))?;
    Ok(Json(site))
}

/// POST /api/sites/{id}/join
///
/// Registers the user on the site's roster. The user record is only touched
/// once the site is known to exist.
pub async fn join(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<JoinSite>,
) -> AppResult<Json<JoinResponse>> {
    let member = input.validate()?;
    let store = state.store().await;

    let site = SiteRepo::find_by_id(store, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Site", id.as_str())))?;
    UserRepo::join(store, &site.id, &member).await?;

    Ok(Json(JoinResponse {
        success: true,
        site,
    }))
}

/// GET /api/sites/{id}/users
pub async fn list_users(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list_by_site(state.store().await, &id).await?;
    Ok(Json(users))
}

/// POST /api/init-samples
pub async fn init_samples(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let seed = SiteRepo::seed_samples(state.store().await).await?;
    let message = if seed.inserted {
        "Sample sites initialized"
    } else {
        "Sample sites already initialized"
    };
    Ok(Json(SeedResponse {
        success: true,
        message,
        sites: seed.sites,
    }))
}
