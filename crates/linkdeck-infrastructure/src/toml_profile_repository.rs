//! TOML-based ProfileRepository implementation.

use crate::dto::{ProfileRecord, ProfilesDocument};
use crate::storage::TomlDocument;
use async_trait::async_trait;
use chrono::Utc;
use linkdeck_core::profile::{Profile, ProfilePatch, ProfileRepository};
use linkdeck_core::{LinkdeckError, Result};
use std::path::Path;

/// Stores the `profiles` collection in a single `profiles.toml` document.
///
/// Handle uniqueness is enforced here, inside the document's write lock,
/// which is what makes it safe for the core to rely on `Conflict` rather
/// than re-checking after a write.
pub struct TomlProfileRepository {
    document: TomlDocument<ProfilesDocument>,
}

impl TomlProfileRepository {
    /// Creates a repository over `<base_dir>/profiles.toml`.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            document: TomlDocument::new(base_dir.as_ref().join("profiles.toml")),
        }
    }

    fn find_where<F>(&self, predicate: F) -> Result<Option<Profile>>
    where
        F: Fn(&ProfileRecord) -> bool,
    {
        let document = self.document.load()?;
        document
            .profiles
            .iter()
            .find(|r| predicate(r))
            .map(Profile::try_from)
            .transpose()
    }
}

#[async_trait]
impl ProfileRepository for TomlProfileRepository {
    async fn find_by_id(&self, profile_id: &str) -> Result<Option<Profile>> {
        self.find_where(|r| r.id == profile_id)
    }

    async fn find_by_handle(&self, handle: &str) -> Result<Option<Profile>> {
        self.find_where(|r| r.handle == handle)
    }

    async fn find_by_contact_local_part(&self, local_part: &str) -> Result<Option<Profile>> {
        self.find_where(|r| {
            r.contact_address
                .as_deref()
                .and_then(|a| a.split('@').next())
                .is_some_and(|lp| lp == local_part)
        })
    }

    async fn insert(&self, profile: &Profile) -> Result<Profile> {
        let record = ProfileRecord::from(profile);
        self.document.update(move |doc| {
            if doc.profiles.iter().any(|r| r.id == record.id) {
                return Err(LinkdeckError::conflict(format!(
                    "profile '{}' already exists",
                    record.id
                )));
            }
            if doc.profiles.iter().any(|r| r.handle == record.handle) {
                return Err(LinkdeckError::conflict(format!(
                    "handle '{}' is already taken",
                    record.handle
                )));
            }
            doc.profiles.push(record.clone());
            Ok(())
        })?;
        tracing::debug!(profile_id = %profile.id, handle = %profile.handle, "profile inserted");
        Ok(profile.clone())
    }

    async fn update(&self, profile_id: &str, patch: ProfilePatch) -> Result<Profile> {
        let updated = self.document.update(|doc| {
            if let Some(handle) = &patch.handle {
                if doc
                    .profiles
                    .iter()
                    .any(|r| r.handle == *handle && r.id != profile_id)
                {
                    return Err(LinkdeckError::conflict(format!(
                        "handle '{}' is already taken",
                        handle
                    )));
                }
            }

            let record = doc
                .profiles
                .iter_mut()
                .find(|r| r.id == profile_id)
                .ok_or_else(|| LinkdeckError::not_found("profile", profile_id))?;

            if let Some(handle) = &patch.handle {
                record.handle = handle.clone();
            }
            if let Some(display_name) = &patch.display_name {
                record.display_name = Some(display_name.clone());
            }
            if let Some(avatar_url) = &patch.avatar_url {
                record.avatar_url = Some(avatar_url.clone());
            }
            record.updated_at = Utc::now().to_rfc3339();

            Profile::try_from(&*record)
        })?;
        tracing::debug!(profile_id, "profile updated");
        Ok(updated)
    }
}
