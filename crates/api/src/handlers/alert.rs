//! Handlers for the `/alerts` resource.

use axum::extract::{Path, State};
use axum::Json;
use sara_db::models::alert::{AcknowledgeAlert, Alert, CreateAlert};
use sara_db::repositories::{AlertRepo, UserRepo};

use crate::error::AppResult;
use crate::extract::{JsonBody, LenientJsonBody};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /api/alerts
///
/// Raises a new active alert, deactivating the site's previous one.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateAlert>,
) -> AppResult<Json<Alert>> {
    let input = input.validate()?;
    let alert = AlertRepo::create(state.store().await, &input).await?;
    Ok(Json(alert))
}

/// GET /api/alerts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Alert>>> {
    let alerts = AlertRepo::list(state.store().await).await?;
    Ok(Json(alerts))
}

/// GET /api/sites/{id}/alerts
pub async fn list_by_site(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> AppResult<Json<Vec<Alert>>> {
    let alerts = AlertRepo::list_by_site(state.store().await, &site_id).await?;
    Ok(Json(alerts))
}

/// POST /api/alerts/{id}/acknowledge
///
/// Acknowledgement is recorded on the user, not the alert: the path id is
/// not looked up. Unknown or missing users, and a missing body, are a
/// successful no-op.
pub async fn acknowledge(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
    LenientJsonBody(input): LenientJsonBody<AcknowledgeAlert>,
) -> AppResult<Json<SuccessResponse>> {
    if let Some(user_id) = input.user_id.as_deref() {
        let needs_help = input.needs_help.unwrap_or(false);
        let found = UserRepo::acknowledge(state.store().await, user_id, needs_help).await?;
        tracing::info!(%alert_id, user_id, needs_help, found, "Alert acknowledged");
    }
    Ok(Json(SuccessResponse::ok()))
}
