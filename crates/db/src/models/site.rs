//! Site entity model and DTOs.

use serde::{Deserialize, Serialize};
use sara_core::error::CoreError;
use sara_core::types::{epoch_millis, EpochMillis};
use sara_core::validation::require_all;

use crate::collection::{Record, SortOrder, SortSpec};

/// A construction site workers can join by its short code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    pub site_code: String,
    #[serde(deserialize_with = "epoch_millis::deserialize")]
    pub created_at: EpochMillis,
    pub manager_id: String,
    pub company_id: String,
}

impl Record for Site {
    const COLLECTION: &'static str = "sites";
    const SORT: Option<SortSpec> = Some(SortSpec {
        field: "createdAt",
        order: SortOrder::Ascending,
    });

    fn key(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> i64 {
        self.created_at
    }
}

/// Body of `POST /api/sites`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSite {
    pub name: Option<String>,
    pub manager_id: Option<String>,
}

/// Validated site creation input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSite {
    pub name: String,
    pub manager_id: String,
}

impl CreateSite {
    pub fn validate(&self) -> Result<NewSite, CoreError> {
        let [name, manager_id] = require_all(
            [self.name.as_deref(), self.manager_id.as_deref()],
            "Name and managerId are required",
        )?;
        Ok(NewSite {
            name: name.trim().to_string(),
            manager_id,
        })
    }
}

/// Body of `POST /api/sites/{id}/join`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JoinSite {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub role: Option<String>,
}

/// Validated join request.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMembership {
    pub user_id: String,
    pub user_name: String,
    pub role: String,
}

impl JoinSite {
    pub fn validate(&self) -> Result<SiteMembership, CoreError> {
        let [user_id, user_name, role] = require_all(
            [
                self.user_id.as_deref(),
                self.user_name.as_deref(),
                self.role.as_deref(),
            ],
            "userId, userName, and role are required",
        )?;
        Ok(SiteMembership {
            user_id,
            user_name,
            role,
        })
    }
}
