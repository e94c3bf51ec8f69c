//! Route definitions for the `/alerts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::alert;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// POST   /{id}/acknowledge     -> acknowledge
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alert::list).post(alert::create))
        .route("/{id}/acknowledge", post(alert::acknowledge))
}
