//! Handlers for the `/toolbox-talks` resource.

use axum::extract::{Query, State};
use axum::Json;
use sara_db::models::toolbox_talk::{CreateToolboxTalk, ToolboxTalk, ToolboxTalkQuery};
use sara_db::repositories::ToolboxTalkRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Confirmation placed in the `message` key of a creation reply.
const CREATED_MESSAGE: &str = "Toolbox talk created";

/// GET /api/toolbox-talks?siteId=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ToolboxTalkQuery>,
) -> AppResult<Json<Vec<ToolboxTalk>>> {
    let site_id = query.validate()?;
    let talks = ToolboxTalkRepo::list_by_site(state.store().await, &site_id).await?;
    Ok(Json(talks))
}

/// POST /api/toolbox-talks
///
/// Replies with the stored talk plus `success`; clients read the
/// confirmation from `message`, which replaces the talk text in the reply.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateToolboxTalk>,
) -> AppResult<Json<Value>> {
    let input = input.validate()?;
    let talk = ToolboxTalkRepo::create(state.store().await, &input).await?;

    let mut body = serde_json::to_value(&talk)
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    if let Value::Object(map) = &mut body {
        map.insert("success".into(), Value::Bool(true));
        map.insert("message".into(), Value::String(CREATED_MESSAGE.into()));
    }
    Ok(Json(body))
}
