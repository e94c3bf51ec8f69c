//! Repository for the `alerts` collection.

use sara_core::alert::alert_date;

use crate::collection::{Filter, Patch};
use crate::error::StoreError;
use crate::models::alert::{Alert, NewAlert};
use crate::store::Store;

/// Provides alert creation (with supersession) and listing.
pub struct AlertRepo;

impl AlertRepo {
    /// Raise a new active alert for its site.
    ///
    /// Every currently active alert for the same site is deactivated first,
    /// so at most one alert per site stays active.
    pub async fn create(store: &Store, input: &NewAlert) -> Result<Alert, StoreError> {
        let _gate = store.alert_gate().lock().await;

        let superseded = store
            .alerts
            .update_many(
                &Filter::all()
                    .eq("siteId", input.site_id.as_str())
                    .eq("active", true),
                &Patch::new().set("active", false),
            )
            .await?;

        let now = store.clock.now();
        let alert = Alert {
            id: store.ids.record_id(),
            site_id: input.site_id.clone(),
            alert_type: input.alert_type.clone(),
            user_id: Some(input.user_id.clone()),
            timestamp: now.timestamp_millis(),
            active: true,
            date: alert_date(now),
        };
        store.alerts.insert(&alert).await?;

        tracing::info!(
            alert_id = %alert.id,
            site_id = %alert.site_id,
            alert_type = %alert.alert_type,
            superseded,
            "Alert raised"
        );
        Ok(alert)
    }

    /// All alerts, newest first.
    pub async fn list(store: &Store) -> Result<Vec<Alert>, StoreError> {
        store.alerts.list(&Filter::all()).await
    }

    /// Alerts for one site, newest first.
    pub async fn list_by_site(store: &Store, site_id: &str) -> Result<Vec<Alert>, StoreError> {
        store.alerts.list(&Filter::all().eq("siteId", site_id)).await
    }
}
