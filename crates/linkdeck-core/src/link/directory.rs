//! Owner-scoped link directory management.

use super::model::{Link, LinkDraft, LinkPatch, LinkStatus};
use super::repository::LinkRepository;
use crate::error::{LinkdeckError, Result};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Manages the authenticated owner's link set.
///
/// `LinkDirectoryManager` is responsible for:
/// - Loading the owner's links into a newest-first in-memory view
/// - Creating new links with owner, status and timestamps assigned here
/// - Editing and retiring links after an ownership check
/// - Keeping the view consistent with every operation's returned row
///
/// One manager is constructed per authenticated session and carries that
/// session's `owner_id`; it never accepts an externally supplied owner for
/// writes. No locking is taken across sessions: each link has exactly one
/// owner, and racing mutations from the same owner resolve to last write
/// wins at the store.
pub struct LinkDirectoryManager {
    /// The acting session's profile id. All writes are scoped to it.
    owner_id: String,
    /// Persistent storage backend for link data
    link_repository: Arc<dyn LinkRepository>,
    /// Newest-first view of the owner's active links
    view: RwLock<Vec<Link>>,
}

impl LinkDirectoryManager {
    /// Creates a new manager scoped to the given owner.
    ///
    /// # Arguments
    ///
    /// * `owner_id` - The authenticated session's profile id
    /// * `link_repository` - The repository backend for link persistence
    pub fn new(owner_id: impl Into<String>, link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            owner_id: owner_id.into(),
            link_repository,
            view: RwLock::new(Vec::new()),
        }
    }

    /// The owner this manager is scoped to.
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Loads the owner's active links, newest first, refreshing the view.
    ///
    /// The dashboard shows the same set as the public page: active links
    /// only. Retired links keep their records but have no view here.
    pub async fn list(&self) -> Result<Vec<Link>> {
        let links = self
            .link_repository
            .list_by_owner(&self.owner_id, true)
            .await?;
        let mut view = self.view.write().await;
        *view = links.clone();
        Ok(links)
    }

    /// Returns the current in-memory view without touching the store.
    pub async fn view(&self) -> Vec<Link> {
        self.view.read().await.clone()
    }

    /// Creates a new link for the owner.
    ///
    /// The draft is validated before any store call; owner, status and
    /// timestamps are assigned here, never taken from the caller. On
    /// success the created row is prepended to the view, matching the
    /// persisted newest-first ordering.
    ///
    /// # Errors
    ///
    /// - `Validation` on an empty title or a non-absolute URL
    /// - `Upstream` if the insert fails
    pub async fn add(&self, draft: LinkDraft) -> Result<Link> {
        draft.validate()?;

        let now = Utc::now();
        let link = Link {
            id: Uuid::new_v4().to_string(),
            owner_id: self.owner_id.clone(),
            title: draft.title,
            url: draft.url,
            description: draft.description,
            status: LinkStatus::Active,
            created_at: now,
            updated_at: now,
        };
        let created = self.link_repository.insert(&link).await?;
        tracing::debug!(link_id = %created.id, owner_id = %self.owner_id, "link created");

        let mut view = self.view.write().await;
        view.insert(0, created.clone());
        Ok(created)
    }

    /// Edits a link's title, url and/or description.
    ///
    /// Only supplied fields are written; `updated_at` is bumped by the
    /// store. The returned row replaces the matching view entry, which is
    /// what gives the caller read-after-write consistency.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the link does not exist
    /// - `NotOwner` if the link belongs to a different profile
    /// - `Validation` on a bad title or URL
    pub async fn edit(&self, link_id: &str, mut patch: LinkPatch) -> Result<Link> {
        // Status transitions go through `remove`; an edit never resurrects
        // or retires a link.
        patch.status = None;
        patch.validate()?;
        self.owned(link_id).await?;

        let updated = self.link_repository.update(link_id, patch).await?;
        tracing::debug!(link_id = %updated.id, owner_id = %self.owner_id, "link updated");

        let mut view = self.view.write().await;
        if let Some(entry) = view.iter_mut().find(|l| l.id == updated.id) {
            *entry = updated.clone();
        }
        Ok(updated)
    }

    /// Retires a link (soft delete).
    ///
    /// The record and id remain stable; the link simply stops appearing in
    /// listings. Retiring an already-retired link is a no-op, not an
    /// error.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the link does not exist
    /// - `NotOwner` if the link belongs to a different profile
    pub async fn remove(&self, link_id: &str) -> Result<()> {
        let link = self.owned(link_id).await?;

        if link.status == LinkStatus::Active {
            let patch = LinkPatch {
                status: Some(LinkStatus::Retired),
                ..Default::default()
            };
            self.link_repository.update(link_id, patch).await?;
            tracing::debug!(link_id = %link_id, owner_id = %self.owner_id, "link retired");
        }

        let mut view = self.view.write().await;
        view.retain(|l| l.id != link_id);
        Ok(())
    }

    /// Fetches a link and verifies it belongs to this manager's owner.
    async fn owned(&self, link_id: &str) -> Result<Link> {
        let link = self
            .link_repository
            .find_by_id(link_id)
            .await?
            .ok_or_else(|| LinkdeckError::not_found("link", link_id))?;
        if link.owner_id != self.owner_id {
            return Err(LinkdeckError::not_owner(link_id));
        }
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // Mock LinkRepository for testing. Rows are kept in insertion order;
    // listing reverses before the stable sort so that ties on created_at
    // still come out newest-insertion-first.
    struct MockLinkRepository {
        links: Mutex<Vec<Link>>,
        insert_calls: Mutex<usize>,
    }

    impl MockLinkRepository {
        fn new() -> Self {
            Self {
                links: Mutex::new(Vec::new()),
                insert_calls: Mutex::new(0),
            }
        }

        fn with_links(links: Vec<Link>) -> Self {
            Self {
                links: Mutex::new(links),
                insert_calls: Mutex::new(0),
            }
        }

        fn insert_count(&self) -> usize {
            *self.insert_calls.lock().unwrap()
        }

        fn raw(&self, link_id: &str) -> Link {
            self.links
                .lock()
                .unwrap()
                .iter()
                .find(|l| l.id == link_id)
                .cloned()
                .unwrap()
        }
    }

    #[async_trait]
    impl LinkRepository for MockLinkRepository {
        async fn find_by_id(&self, link_id: &str) -> Result<Option<Link>> {
            Ok(self
                .links
                .lock()
                .unwrap()
                .iter()
                .find(|l| l.id == link_id)
                .cloned())
        }

        async fn list_by_owner(&self, owner_id: &str, only_active: bool) -> Result<Vec<Link>> {
            let links = self.links.lock().unwrap();
            let mut rows: Vec<Link> = links
                .iter()
                .rev()
                .filter(|l| l.owner_id == owner_id)
                .filter(|l| !only_active || l.status == LinkStatus::Active)
                .cloned()
                .collect();
            rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(rows)
        }

        async fn insert(&self, link: &Link) -> Result<Link> {
            *self.insert_calls.lock().unwrap() += 1;
            self.links.lock().unwrap().push(link.clone());
            Ok(link.clone())
        }

        async fn update(&self, link_id: &str, patch: LinkPatch) -> Result<Link> {
            let mut links = self.links.lock().unwrap();
            let link = links
                .iter_mut()
                .find(|l| l.id == link_id)
                .ok_or_else(|| LinkdeckError::not_found("link", link_id))?;
            patch.apply(link);
            Ok(link.clone())
        }
    }

    fn link(id: &str, owner: &str, status: LinkStatus) -> Link {
        let now = Utc::now();
        Link {
            id: id.to_string(),
            owner_id: owner.to_string(),
            title: format!("Link {}", id),
            url: "https://a.example".to_string(),
            description: String::new(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    fn draft(title: &str) -> LinkDraft {
        LinkDraft {
            title: title.to_string(),
            url: "https://a.example".to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_add_prepends_newest_first() {
        let repo = Arc::new(MockLinkRepository::new());
        let manager = LinkDirectoryManager::new("alice", repo.clone());

        manager.add(draft("First")).await.unwrap();
        manager.add(draft("Second")).await.unwrap();

        let view = manager.view().await;
        assert_eq!(view[0].title, "Second");
        assert_eq!(view[1].title, "First");

        // The persisted ordering agrees with the view, even for adds
        // landing in the same instant.
        let listed = manager.list().await.unwrap();
        assert_eq!(listed[0].title, "Second");
        assert_eq!(listed[1].title, "First");
    }

    #[tokio::test]
    async fn test_add_assigns_owner_and_active_status() {
        let repo = Arc::new(MockLinkRepository::new());
        let manager = LinkDirectoryManager::new("alice", repo.clone());

        let created = manager.add(draft("Blog")).await.unwrap();
        assert_eq!(created.owner_id, "alice");
        assert_eq!(created.status, LinkStatus::Active);
        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn test_add_validation_fails_before_any_store_call() {
        let repo = Arc::new(MockLinkRepository::new());
        let manager = LinkDirectoryManager::new("alice", repo.clone());

        let err = manager.add(draft("")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.insert_count(), 0);
        assert!(manager.view().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_filters_retired_links() {
        let repo = Arc::new(MockLinkRepository::with_links(vec![
            link("l1", "alice", LinkStatus::Active),
            link("l2", "alice", LinkStatus::Retired),
            link("l3", "bob", LinkStatus::Active),
        ]));
        let manager = LinkDirectoryManager::new("alice", repo);

        let listed = manager.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "l1");
    }

    #[tokio::test]
    async fn test_edit_replaces_view_entry() {
        let repo = Arc::new(MockLinkRepository::with_links(vec![link(
            "l1",
            "alice",
            LinkStatus::Active,
        )]));
        let manager = LinkDirectoryManager::new("alice", repo);
        manager.list().await.unwrap();

        let patch = LinkPatch {
            title: Some("Journal".to_string()),
            ..Default::default()
        };
        let updated = manager.edit("l1", patch).await.unwrap();
        assert_eq!(updated.title, "Journal");
        assert_eq!(manager.view().await[0].title, "Journal");
    }

    #[tokio::test]
    async fn test_edit_by_non_owner_fails_and_leaves_row_unmodified() {
        let repo = Arc::new(MockLinkRepository::with_links(vec![link(
            "l1",
            "alice",
            LinkStatus::Active,
        )]));
        let manager = LinkDirectoryManager::new("mallory", repo.clone());

        let patch = LinkPatch {
            title: Some("Stolen".to_string()),
            ..Default::default()
        };
        let err = manager.edit("l1", patch).await.unwrap_err();
        assert!(err.is_not_owner());
        assert_eq!(repo.raw("l1").title, "Link l1");
    }

    #[tokio::test]
    async fn test_edit_cannot_change_status() {
        let repo = Arc::new(MockLinkRepository::with_links(vec![link(
            "l1",
            "alice",
            LinkStatus::Active,
        )]));
        let manager = LinkDirectoryManager::new("alice", repo.clone());

        let patch = LinkPatch {
            status: Some(LinkStatus::Retired),
            ..Default::default()
        };
        manager.edit("l1", patch).await.unwrap();
        assert_eq!(repo.raw("l1").status, LinkStatus::Active);
    }

    #[tokio::test]
    async fn test_remove_retires_and_is_idempotent() {
        let repo = Arc::new(MockLinkRepository::with_links(vec![link(
            "l1",
            "alice",
            LinkStatus::Active,
        )]));
        let manager = LinkDirectoryManager::new("alice", repo.clone());
        manager.list().await.unwrap();

        manager.remove("l1").await.unwrap();
        assert_eq!(repo.raw("l1").status, LinkStatus::Retired);
        assert!(manager.view().await.is_empty());

        // Second call: state unchanged, no error.
        manager.remove("l1").await.unwrap();
        assert_eq!(repo.raw("l1").status, LinkStatus::Retired);
    }

    #[tokio::test]
    async fn test_remove_by_non_owner_fails() {
        let repo = Arc::new(MockLinkRepository::with_links(vec![link(
            "l1",
            "alice",
            LinkStatus::Active,
        )]));
        let manager = LinkDirectoryManager::new("mallory", repo.clone());

        let err = manager.remove("l1").await.unwrap_err();
        assert!(err.is_not_owner());
        assert_eq!(repo.raw("l1").status, LinkStatus::Active);
    }

    #[tokio::test]
    async fn test_remove_missing_link_is_not_found() {
        let repo = Arc::new(MockLinkRepository::new());
        let manager = LinkDirectoryManager::new("alice", repo);

        let err = manager.remove("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
