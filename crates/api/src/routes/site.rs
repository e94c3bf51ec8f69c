//! Route definitions for the `/sites` resource.
//!
//! Also mounts the site-scoped roster and alert listings.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{alert, site};
use crate::state::AppState;

/// Routes mounted at `/sites`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /code/{code}       -> get_by_code
/// GET    /{id}              -> get_by_id
/// POST   /{id}/join         -> join
/// GET    /{id}/users        -> list_users
/// GET    /{id}/alerts       -> alert::list_by_site
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::list).post(site::create))
        .route("/code/{code}", get(site::get_by_code))
        .route("/{id}", get(site::get_by_id))
        .route("/{id}/join", post(site::join))
        .route("/{id}/users", get(site::list_users))
        .route("/{id}/alerts", get(alert::list_by_site))
}
