//! Repository for the `toolboxTalks` collection.

use sara_core::alert::{iso_timestamp, TOOLBOX_TALK_ID_PREFIX};

use crate::collection::Filter;
use crate::error::StoreError;
use crate::models::toolbox_talk::{NewToolboxTalk, ToolboxTalk};
use crate::store::Store;

/// Provides creation and per-site listing of toolbox talks.
pub struct ToolboxTalkRepo;

impl ToolboxTalkRepo {
    pub async fn create(store: &Store, input: &NewToolboxTalk) -> Result<ToolboxTalk, StoreError> {
        let now = store.clock.now();
        let talk = ToolboxTalk {
            id: format!("{TOOLBOX_TALK_ID_PREFIX}{}", store.ids.record_id()),
            site_id: input.site_id.clone(),
            talk_type: input.talk_type.clone(),
            message: input.message.clone(),
            timestamp: now.timestamp_millis(),
            is_active: true,
            acknowledged_by: Vec::new(),
            created_by: input.site_id.clone(),
            created_at: iso_timestamp(now),
        };
        store.toolbox_talks.insert(&talk).await?;
        tracing::info!(talk_id = %talk.id, site_id = %talk.site_id, "Toolbox talk created");
        Ok(talk)
    }

    /// Talks for one site, newest first.
    pub async fn list_by_site(store: &Store, site_id: &str) -> Result<Vec<ToolboxTalk>, StoreError> {
        store
            .toolbox_talks
            .list(&Filter::all().eq("siteId", site_id))
            .await
    }
}
