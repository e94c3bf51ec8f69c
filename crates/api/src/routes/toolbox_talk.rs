//! Route definitions for the `/toolbox-talks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::toolbox_talk;
use crate::state::AppState;

/// Routes mounted at `/toolbox-talks`.
///
/// ```text
/// GET    /?siteId=          -> list
/// POST   /                  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(toolbox_talk::list).post(toolbox_talk::create))
}
