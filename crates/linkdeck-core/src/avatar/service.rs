//! Avatar replacement.

use super::storage::ObjectStorage;
use crate::config::AvatarConfig;
use crate::error::{LinkdeckError, Result};
use crate::profile::{ProfilePatch, ProfileRepository};
use chrono::Utc;
use std::sync::Arc;

/// Prefix under which avatar objects are stored.
const AVATAR_PREFIX: &str = "avatars/";

/// Replaces a profile's avatar image.
///
/// The replacement spans two external systems that do not share a
/// transaction, so the steps are explicitly ordered:
///
/// 1. Upload the new image under a name unique per owner and timestamp.
/// 2. Repoint the profile's `avatar_url`.
/// 3. Best-effort delete of the previous object, if one existed.
///
/// A failure in step 1 or 2 aborts with the previous `avatar_url` intact;
/// step 2 failing leaves the new object as an acceptable orphan. A failure
/// in step 3 is logged and swallowed, so the profile never references a
/// nonexistent object.
pub struct AvatarService {
    profile_repository: Arc<dyn ProfileRepository>,
    object_storage: Arc<dyn ObjectStorage>,
    config: AvatarConfig,
}

impl AvatarService {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository>,
        object_storage: Arc<dyn ObjectStorage>,
        config: AvatarConfig,
    ) -> Self {
        Self {
            profile_repository,
            object_storage,
            config,
        }
    }

    /// Uploads a replacement avatar and returns its public URL.
    ///
    /// # Arguments
    ///
    /// * `owner_id` - The acting session's profile id
    /// * `bytes` - The raw image bytes
    /// * `content_type` - The image MIME type as reported by the uploader
    ///
    /// # Errors
    ///
    /// - `Validation` on an unaccepted content type or oversized image,
    ///   before any external call
    /// - `NotFound` if the profile does not exist
    /// - `Upstream` if the upload or the profile update fails
    pub async fn replace(&self, owner_id: &str, bytes: &[u8], content_type: &str) -> Result<String> {
        self.validate(bytes, content_type)?;

        let profile = self
            .profile_repository
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| LinkdeckError::not_found("profile", owner_id))?;
        let previous_url = profile.avatar_url.clone();

        // Unique per (owner, timestamp) to avoid collisions with the
        // object being replaced.
        let path = format!(
            "{}{}-{}.{}",
            AVATAR_PREFIX,
            owner_id,
            Utc::now().timestamp_millis(),
            extension_for(content_type),
        );

        let url = self.object_storage.put(&path, bytes, content_type).await?;

        self.profile_repository
            .update(
                owner_id,
                ProfilePatch {
                    avatar_url: Some(url.clone()),
                    ..Default::default()
                },
            )
            .await?;
        tracing::info!(owner_id, url = %url, "avatar replaced");

        if let Some(old_path) = previous_url.as_deref().and_then(object_path) {
            if let Err(err) = self.object_storage.delete(&old_path).await {
                tracing::warn!(owner_id, old_path, %err, "failed to delete previous avatar");
            }
        }

        Ok(url)
    }

    fn validate(&self, bytes: &[u8], content_type: &str) -> Result<()> {
        if !self
            .config
            .accepted_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(content_type))
        {
            return Err(LinkdeckError::validation(
                "content_type",
                format!("'{}' is not an accepted image type", content_type),
            ));
        }
        if bytes.len() > self.config.max_bytes {
            return Err(LinkdeckError::validation(
                "image",
                format!(
                    "{} bytes exceeds the {} byte maximum",
                    bytes.len(),
                    self.config.max_bytes
                ),
            ));
        }
        Ok(())
    }
}

/// File extension for an accepted image content type.
fn extension_for(content_type: &str) -> String {
    match content_type.to_ascii_lowercase().as_str() {
        "image/jpeg" => "jpg".to_string(),
        other => other.rsplit('/').next().unwrap_or("bin").to_string(),
    }
}

/// Extracts the object path back out of a public avatar URL.
fn object_path(url: &str) -> Option<String> {
    url.find(AVATAR_PREFIX).map(|idx| url[idx..].to_string())
}
