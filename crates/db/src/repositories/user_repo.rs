//! Repository for the `users` collection.

use serde_json::Value;

use crate::collection::{Filter, Patch};
use crate::error::StoreError;
use crate::models::site::SiteMembership;
use crate::models::user::{User, UserProfile};
use crate::store::Store;

/// Provides upsert, lookup, and acknowledgement for users.
pub struct UserRepo;

impl UserRepo {
    /// Create the user or refresh its profile.
    ///
    /// A new user starts with `acknowledged` and `needsHelp` cleared; an
    /// existing user keeps both and only has name, role, site, and
    /// `lastActive` overwritten.
    pub async fn upsert(store: &Store, profile: &UserProfile) -> Result<User, StoreError> {
        let patch = Patch::new()
            .set("name", profile.name.as_str())
            .set("role", profile.role.as_str())
            .set("siteId", profile.site_id.clone().map_or(Value::Null, Value::String))
            .set("lastActive", store.clock.now().timestamp_millis())
            .on_insert("acknowledged", false)
            .on_insert("needsHelp", false);

        let user = store
            .users
            .update(&profile.id, &patch, true)
            .await?
            .ok_or_else(|| StoreError::MissingUpsert {
                collection: "users",
                key: profile.id.clone(),
            })?;
        tracing::debug!(user_id = %user.id, site_id = ?user.site_id, "User upserted");
        Ok(user)
    }

    /// Bind the member to `site_id`, creating the user if needed.
    ///
    /// The caller is responsible for checking the site exists.
    pub async fn join(
        store: &Store,
        site_id: &str,
        member: &SiteMembership,
    ) -> Result<User, StoreError> {
        let profile = UserProfile {
            id: member.user_id.clone(),
            name: member.user_name.clone(),
            role: member.role.clone(),
            site_id: Some(site_id.to_string()),
        };
        let user = Self::upsert(store, &profile).await?;
        tracing::info!(user_id = %user.id, site_id, role = %user.role, "User joined site");
        Ok(user)
    }

    pub async fn list(store: &Store) -> Result<Vec<User>, StoreError> {
        store.users.list(&Filter::all()).await
    }

    pub async fn find_by_id(store: &Store, id: &str) -> Result<Option<User>, StoreError> {
        store.users.get(id).await
    }

    /// Users currently bound to `site_id`.
    pub async fn list_by_site(store: &Store, site_id: &str) -> Result<Vec<User>, StoreError> {
        store.users.list(&Filter::all().eq("siteId", site_id)).await
    }

    /// Mark the user as having acknowledged the latest alert.
    ///
    /// Returns `false` without creating anything if the user does not exist.
    pub async fn acknowledge(
        store: &Store,
        user_id: &str,
        needs_help: bool,
    ) -> Result<bool, StoreError> {
        let patch = Patch::new()
            .set("acknowledged", true)
            .set("needsHelp", needs_help);
        let updated = store.users.update(user_id, &patch, false).await?;
        Ok(updated.is_some())
    }
}
