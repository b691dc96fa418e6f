//! Profile repository trait.
//!
//! Defines the interface for profile persistence operations.

use super::model::{Profile, ProfilePatch};
use crate::error::Result;
use async_trait::async_trait;

/// Repository for profile persistence.
///
/// Implementations must enforce handle uniqueness on `insert` and on
/// `update` when the patch carries a new handle, failing with
/// `LinkdeckError::Conflict` rather than overwriting.
///
/// Per-row atomicity for single-profile updates is the store's contract;
/// the core does not take locks of its own.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds a profile by its stable identity id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Profile))`: Profile found
    /// - `Ok(None)`: Profile not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, profile_id: &str) -> Result<Option<Profile>>;

    /// Finds a profile by exact handle match.
    async fn find_by_handle(&self, handle: &str) -> Result<Option<Profile>>;

    /// Finds a profile whose originating contact address has the given
    /// local-part.
    ///
    /// This fallback exists only to bridge accounts created before a handle
    /// was assigned explicitly; new accounts always resolve by handle.
    async fn find_by_contact_local_part(&self, local_part: &str) -> Result<Option<Profile>>;

    /// Inserts a new profile.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the handle is already taken
    /// - `Upstream` if the store call fails
    async fn insert(&self, profile: &Profile) -> Result<Profile>;

    /// Applies a partial update and bumps `updated_at`.
    ///
    /// Only fields supplied in the patch are written.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no profile has the given id
    /// - `Conflict` if the patch renames to a taken handle
    async fn update(&self, profile_id: &str, patch: ProfilePatch) -> Result<Profile>;
}
