//! Alert entity model and DTOs.

use serde::{Deserialize, Serialize};
use sara_core::error::CoreError;
use sara_core::types::{epoch_millis, EpochMillis};
use sara_core::validation::require_all;

use crate::collection::{Record, SortOrder, SortSpec};

/// A site-wide alert. At most one alert per site is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub site_id: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    /// Raising user; absent on alerts stored before it was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "epoch_millis::deserialize")]
    pub timestamp: EpochMillis,
    pub active: bool,
    pub date: String,
}

impl Record for Alert {
    const COLLECTION: &'static str = "alerts";
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

/// Body of `POST /api/alerts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAlert {
    pub site_id: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    pub user_id: Option<String>,
}

/// Validated alert input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub site_id: String,
    pub alert_type: String,
    pub user_id: String,
}

impl CreateAlert {
    pub fn validate(&self) -> Result<NewAlert, CoreError> {
        let [site_id, alert_type, user_id] = require_all(
            [
                self.site_id.as_deref(),
                self.alert_type.as_deref(),
                self.user_id.as_deref(),
            ],
            "siteId, type, and userId are required",
        )?;
        Ok(NewAlert {
            site_id,
            alert_type,
            user_id,
        })
    }
}

/// Body of `POST /api/alerts/{id}/acknowledge`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcknowledgeAlert {
    pub user_id: Option<String>,
    pub needs_help: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_alert_without_user_deserializes() {
        let alert: Alert = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "siteId": "s1",
            "type": "fire",
            "timestamp": 10,
            "active": true,
            "date": "2026-01-01"
        }))
        .unwrap();
        assert_eq!(alert.user_id, None);
        assert_eq!(alert.alert_type, "fire");
    }

    #[test]
    fn stored_double_timestamp_deserializes() {
        let stored = mongodb::bson::doc! {
            "id": "a1",
            "siteId": "s1",
            "type": "fire",
            "userId": "u1",
            "timestamp": 1_767_225_600_123.0_f64,
            "active": false,
            "date": "2026-01-01",
        };
        let alert: Alert = mongodb::bson::from_document(stored).unwrap();
        assert_eq!(alert.timestamp, 1_767_225_600_123);
        assert_eq!(alert.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn create_alert_reads_type_field() {
        let input: CreateAlert = serde_json::from_value(serde_json::json!({
            "siteId": "s1",
            "type": "evacuate",
            "userId": "u1"
        }))
        .unwrap();
        assert_eq!(input.validate().unwrap().alert_type, "evacuate");
    }
}
