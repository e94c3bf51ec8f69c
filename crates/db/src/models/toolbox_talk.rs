//! Toolbox talk entity model and DTOs.

use serde::{Deserialize, Serialize};
use sara_core::error::CoreError;
use sara_core::types::{epoch_millis, EpochMillis};
use sara_core::validation::require_all;

use crate::collection::{Record, SortOrder, SortSpec};

/// A short safety message broadcast to a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxTalk {
    pub id: String,
    pub site_id: String,
    #[serde(rename = "type")]
    pub talk_type: String,
    pub message: String,
    #[serde(deserialize_with = "epoch_millis::deserialize")]
    pub timestamp: EpochMillis,
    pub is_active: bool,
    pub acknowledged_by: Vec<String>,
    /// Holds the site id the talk was posted to, not a user.
    pub created_by: String,
    pub created_at: String,
}

impl Record for ToolboxTalk {
    const COLLECTION: &'static str = "toolboxTalks";
    const SORT: Option<SortSpec> = Some(SortSpec {
        field: "timestamp",
        order: SortOrder::Descending,
    });

    fn key(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> i64 {
        self.timestamp
    }
}

/// Body of `POST /api/toolbox-talks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateToolboxTalk {
    pub site_id: Option<String>,
    #[serde(rename = "type")]
    pub talk_type: Option<String>,
    pub message: Option<String>,
}

/// Validated toolbox talk input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewToolboxTalk {
    pub site_id: String,
    pub talk_type: String,
    pub message: String,
}

impl CreateToolboxTalk {
    pub fn validate(&self) -> Result<NewToolboxTalk, CoreError> {
        let [site_id, talk_type, message] = require_all(
            [
                self.site_id.as_deref(),
                self.talk_type.as_deref(),
                self.message.as_deref(),
            ],
            "Missing required fields: siteId, type, message",
        )?;
        Ok(NewToolboxTalk {
            site_id,
            talk_type,
            message,
        })
    }
}

/// Query string of `GET /api/toolbox-talks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolboxTalkQuery {
    pub site_id: Option<String>,
}

impl ToolboxTalkQuery {
    pub fn validate(&self) -> Result<String, CoreError> {
        let [site_id] = require_all(
            [self.site_id.as_deref()],
            "Missing required parameter: siteId",
        )?;
        Ok(site_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_without_site_id_is_rejected() {
        assert!(ToolboxTalkQuery::default().validate().is_err());
    }

    #[test]
    fn message_is_required() {
        let input = CreateToolboxTalk {
            site_id: Some("s1".into()),
            talk_type: Some("ppe".into()),
            message: Some(" ".into()),
        };
        assert!(input.validate().is_err());
    }
}
