//! Link repository trait.
//!
//! Defines the interface for link persistence operations.

use super::model::{Link, LinkPatch};
use crate::error::Result;
use async_trait::async_trait;

/// Repository for link persistence.
///
/// Every listing is owner-scoped; there is no cross-owner query surface.
/// Single-row updates are atomic at the store, which is all the
/// concurrency control the core relies on (last write wins for racing
/// mutations by the same owner).
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its id, regardless of status.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))`: Link found
    /// - `Ok(None)`: Link not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, link_id: &str) -> Result<Option<Link>>;

    /// Lists an owner's links, newest first (`created_at` descending).
    ///
    /// # Arguments
    ///
    /// * `owner_id` - The owning profile's id
    /// * `only_active` - When true, retired links are filtered out
    async fn list_by_owner(&self, owner_id: &str, only_active: bool) -> Result<Vec<Link>>;

    /// Inserts a new link and returns the stored row.
    async fn insert(&self, link: &Link) -> Result<Link>;

    /// Applies a partial update and returns the stored row.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no link has the given id
    /// - `Upstream` if the store call fails
    async fn update(&self, link_id: &str, patch: LinkPatch) -> Result<Link>;
}
