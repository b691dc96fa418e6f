//! Public handle resolution.

use super::model::Profile;
use super::repository::ProfileRepository;
use crate::error::{LinkdeckError, Result};
use crate::link::{Link, LinkRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How an input string resolved to a profile.
///
/// The fallback variant is tagged so callers can tell legacy accounts
/// apart from handle-resolved ones and eventually migrate them to
/// explicit handles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Resolution {
    /// The input matched a profile's handle exactly.
    ResolvedByHandle(Profile),
    /// The input matched the local-part of a profile's contact address.
    ResolvedByFallback(Profile),
}

impl Resolution {
    /// The resolved profile, however it was found.
    pub fn profile(&self) -> &Profile {
        match self {
            Resolution::ResolvedByHandle(p) | Resolution::ResolvedByFallback(p) => p,
        }
    }

    /// Whether this account still relies on fallback resolution.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::ResolvedByFallback(_))
    }
}

/// A resolved public directory page: the profile plus its visible links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryView {
    pub resolution: Resolution,
    /// Active links only, newest first.
    pub links: Vec<Link>,
}

impl DirectoryView {
    pub fn profile(&self) -> &Profile {
        self.resolution.profile()
    }
}

/// Maps a public handle string to exactly one profile.
///
/// Resolution order:
/// 1. Exact handle match.
/// 2. Contact-address local-part match, bridging accounts created before
///    a handle was assigned explicitly.
/// 3. `NotFound`.
pub struct IdentityResolver {
    profile_repository: Arc<dyn ProfileRepository>,
    link_repository: Arc<dyn LinkRepository>,
}

impl IdentityResolver {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository>,
        link_repository: Arc<dyn LinkRepository>,
    ) -> Self {
        Self {
            profile_repository,
            link_repository,
        }
    }

    /// Resolves an input string to a profile.
    ///
    /// # Errors
    ///
    /// `NotFound` when neither the handle lookup nor the local-part
    /// fallback matches.
    pub async fn resolve(&self, input: &str) -> Result<Resolution> {
        if let Some(profile) = self.profile_repository.find_by_handle(input).await? {
            return Ok(Resolution::ResolvedByHandle(profile));
        }

        if let Some(profile) = self
            .profile_repository
            .find_by_contact_local_part(input)
            .await?
        {
            tracing::debug!(input, profile_id = %profile.id, "resolved via contact-address fallback");
            return Ok(Resolution::ResolvedByFallback(profile));
        }

        Err(LinkdeckError::not_found("profile", input))
    }

    /// Resolves an input string to a full directory page.
    ///
    /// Returns the profile and its active links, newest first. A resolved
    /// profile with zero active links is a valid empty directory, not
    /// `NotFound`; the caller never receives partial data.
    pub async fn resolve_directory(&self, input: &str) -> Result<DirectoryView> {
        let resolution = self.resolve(input).await?;
        let links = self
            .link_repository
            .list_by_owner(&resolution.profile().id, true)
            .await?;
        Ok(DirectoryView { resolution, links })
    }
}
