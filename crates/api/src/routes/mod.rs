pub mod alert;
pub mod health;
pub mod site;
pub mod toolbox_talk;
pub mod user;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                          liveness + collection counts (GET)
/// /init-samples                    seed demo sites once (POST)
///
/// /sites                           list, create
/// /sites/code/{code}               lookup by join code
/// /sites/{id}                      get
/// /sites/{id}/join                 join (POST)
/// /sites/{id}/users                site roster
/// /sites/{id}/alerts               site alerts, newest first
///
/// /users                           list, upsert
/// /users/{id}                      get
///
/// /alerts                          list, raise
/// /alerts/{id}/acknowledge         acknowledge (POST)
///
/// /toolbox-talks                   list (?siteId=), create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/init-samples", post(handlers::site::init_samples))
        .nest("/sites", site::router())
        .nest("/users", user::router())
        .nest("/alerts", alert::router())
        .nest("/toolbox-talks", toolbox_talk::router())
}
