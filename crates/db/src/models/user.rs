//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sara_core::error::CoreError;
use sara_core::types::{epoch_millis, EpochMillis};
use sara_core::validation::{present, require_all};

use crate::collection::{Record, SortSpec};

/// A site participant. One record per user id; a user belongs to at most
/// one site at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: String,
    pub site_id: Option<String>,
    pub acknowledged: bool,
    pub needs_help: bool,
    #[serde(deserialize_with = "epoch_millis::deserialize")]
    pub last_active: EpochMillis,
}

impl Record for User {
    const COLLECTION: &'static str = "users";
    const SORT: Option<SortSpec> = None;

    fn key(&self) -> &str {
        &self.id
    }
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertUser {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub site_id: Option<String>,
}

/// Validated user upsert input.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub site_id: Option<String>,
}

impl UpsertUser {
    pub fn validate(&self) -> Result<UserProfile, CoreError> {
        let [id, name, role] = require_all(
            [self.id.as_deref(), self.name.as_deref(), self.role.as_deref()],
            "id, name, and role are required",
        )?;
        Ok(UserProfile {
            id,
            name,
            role,
            site_id: present(self.site_id.as_deref()),
        })
    }
}
