//! TOML-based LinkRepository implementation.

use crate::dto::{LinkRecord, LinksDocument};
use crate::storage::TomlDocument;
use async_trait::async_trait;
use linkdeck_core::link::{Link, LinkPatch, LinkRepository};
use linkdeck_core::{LinkdeckError, Result};
use std::path::Path;

/// Stores the `links` collection in a single `links.toml` document.
///
/// Rows are kept in insertion order; listings reverse that order before a
/// stable sort on `created_at`, so two links created in the same instant
/// still come out newest-insertion-first.
pub struct TomlLinkRepository {
    document: TomlDocument<LinksDocument>,
}

impl TomlLinkRepository {
    /// Creates a repository over `<base_dir>/links.toml`.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            document: TomlDocument::new(base_dir.as_ref().join("links.toml")),
        }
    }
}

#[async_trait]
impl LinkRepository for TomlLinkRepository {
    async fn find_by_id(&self, link_id: &str) -> Result<Option<Link>> {
        let document = self.document.load()?;
        document
            .links
            .iter()
            .find(|r| r.id == link_id)
            .map(Link::try_from)
            .transpose()
    }

    async fn list_by_owner(&self, owner_id: &str, only_active: bool) -> Result<Vec<Link>> {
        let document = self.document.load()?;
        let mut links = document
            .links
            .iter()
            .rev()
            .filter(|r| r.owner_id == owner_id)
            .filter(|r| !only_active || r.is_active)
            .map(Link::try_from)
            .collect::<Result<Vec<Link>>>()?;
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(links)
    }

    async fn insert(&self, link: &Link) -> Result<Link> {
        let record = LinkRecord::from(link);
        self.document.update(move |doc| {
            if doc.links.iter().any(|r| r.id == record.id) {
                return Err(LinkdeckError::conflict(format!(
                    "link '{}' already exists",
                    record.id
                )));
            }
            doc.links.push(record.clone());
            Ok(())
        })?;
        tracing::debug!(link_id = %link.id, owner_id = %link.owner_id, "link inserted");
        Ok(link.clone())
    }

    async fn update(&self, link_id: &str, patch: LinkPatch) -> Result<Link> {
        let updated = self.document.update(|doc| {
            let record = doc
                .links
                .iter_mut()
                .find(|r| r.id == link_id)
                .ok_or_else(|| LinkdeckError::not_found("link", link_id))?;

            let mut link = Link::try_from(&*record)?;
            patch.apply(&mut link);
            *record = LinkRecord::from(&link);
            Ok(link)
        })?;
        tracing::debug!(link_id, "link updated");
        Ok(updated)
    }
}
