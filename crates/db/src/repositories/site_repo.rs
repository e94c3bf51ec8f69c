//! Repository for the `sites` collection.

use sara_core::samples::{SAMPLE_MANAGER_ID, SAMPLE_SITES};
use sara_core::types::DEFAULT_COMPANY_ID;

use crate::collection::Filter;
use crate::error::StoreError;
use crate::models::site::{NewSite, Site};
use crate::store::Store;

/// Result of seeding the demo sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSeed {
    /// Whether the samples were inserted by this call.
    pub inserted: bool,
    /// Number of sites after seeding.
    pub sites: u64,
}

/// Provides creation and lookup for sites.
pub struct SiteRepo;

impl SiteRepo {
    /// Insert a new site with a fresh id and join code.
    pub async fn create(store: &Store, input: &NewSite) -> Result<Site, StoreError> {
        let site = Site {
            id: store.ids.record_id(),
            name: input.name.clone(),
            site_code: store.ids.site_code(),
            created_at: store.clock.now().timestamp_millis(),
            manager_id: input.manager_id.clone(),
            company_id: DEFAULT_COMPANY_ID.to_string(),
        };
        store.sites.insert(&site).await?;
        tracing::info!(site_id = %site.id, site_code = %site.site_code, "Site created");
        Ok(site)
    }

    /// All sites in creation order.
    pub async fn list(store: &Store) -> Result<Vec<Site>, StoreError> {
        store.sites.list(&Filter::all()).await
    }

    pub async fn find_by_id(store: &Store, id: &str) -> Result<Option<Site>, StoreError> {
        store.sites.get(id).await
    }

    /// Find a site by join code. The code is matched case-insensitively.
    pub async fn find_by_code(store: &Store, code: &str) -> Result<Option<Site>, StoreError> {
        let code = code.trim().to_uppercase();
        store
            .sites
            .find_one(&Filter::all().eq("siteCode", code))
            .await
    }

    /// Insert the demo sites if no site exists yet.
    pub async fn seed_samples(store: &Store) -> Result<SampleSeed, StoreError> {
        let existing = store.sites.count().await?;
        if existing > 0 {
            return Ok(SampleSeed {
                inserted: false,
                sites: existing,
            });
        }

        let created_at = store.clock.now().timestamp_millis();
        for sample in &SAMPLE_SITES {
            let site = Site {
                id: sample.id.to_string(),
                name: sample.name.to_string(),
                site_code: sample.site_code.to_string(),
                created_at,
                manager_id: SAMPLE_MANAGER_ID.to_string(),
                company_id: DEFAULT_COMPANY_ID.to_string(),
            };
            store.sites.insert(&site).await?;
        }

        let codes: Vec<&str> = SAMPLE_SITES.iter().map(|s| s.site_code).collect();
        tracing::info!(?codes, "Sample sites initialized");
        Ok(SampleSeed {
            inserted: true,
            sites: store.sites.count().await?,
        })
    }
}
