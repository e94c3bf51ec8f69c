//! Shared response body types for API handlers.
//!
//! Most endpoints return the resource itself; the types here cover the
//! `{ "success": true, ... }` acknowledgement shapes.

use sara_db::models::site::Site;
use serde::Serialize;

/// Bare `{ "success": true }`.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Reply to a successful site join.
#[derive(Debug, Serialize)]
pub struct JoinResponse {
    pub success: bool,
    pub site: Site,
}

/// Reply to `POST /api/init-samples`.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: &'static str,
    pub sites: u64,
}
