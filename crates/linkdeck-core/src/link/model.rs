//! Link domain model.

use crate::error::{LinkdeckError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Lifecycle state of a link.
///
/// Deletion is logical: a retired link keeps its record and id and simply
/// stops appearing in listings. There is no third state; a future trash
/// view would reuse `Retired`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LinkStatus {
    Active,
    Retired,
}

impl Default for LinkStatus {
    fn default() -> Self {
        LinkStatus::Active
    }
}

/// A single entry in an owner's directory.
///
/// Exclusively owned by the profile identified by `owner_id`; there is no
/// sharing and no cross-owner access path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    /// Opaque store-assigned identifier.
    pub id: String,
    /// The owning profile's id. Immutable.
    pub owner_id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub status: LinkStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Whether this link appears on the public directory.
    pub fn is_visible(&self) -> bool {
        self.status == LinkStatus::Active
    }
}

/// Input for creating a new link. Owner, status and timestamps are
/// assigned by the manager, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl LinkDraft {
    /// Validates the draft before any store call.
    ///
    /// # Errors
    ///
    /// - `Validation` on an empty title
    /// - `Validation` when the URL does not parse as absolute
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_url(&self.url)?;
        Ok(())
    }
}

/// A partial update to a link. Only supplied fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub status: Option<LinkStatus>,
}

impl LinkPatch {
    /// Validates the supplied fields before any store call.
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(url) = &self.url {
            validate_url(url)?;
        }
        Ok(())
    }

    /// Applies the patch to a link, bumping `updated_at`.
    pub fn apply(&self, link: &mut Link) {
        if let Some(title) = &self.title {
            link.title = title.clone();
        }
        if let Some(url) = &self.url {
            link.url = url.clone();
        }
        if let Some(description) = &self.description {
            link.description = description.clone();
        }
        if let Some(status) = self.status {
            link.status = status;
        }
        link.updated_at = Utc::now();
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(LinkdeckError::validation("title", "must not be empty"));
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<()> {
    // Url::parse rejects relative references, so a successful parse means
    // the URL is absolute.
    Url::parse(url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, url: &str) -> LinkDraft {
        LinkDraft {
            title: title.to_string(),
            url: url.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_draft_rejects_empty_title() {
        let err = draft("  ", "https://a.example").validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_draft_rejects_relative_url() {
        let err = draft("Blog", "/blog").validate().unwrap_err();
        assert!(err.is_validation());
        assert!(draft("Blog", "https://a.example/blog").validate().is_ok());
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let mut link = Link {
            id: "l1".to_string(),
            owner_id: "o1".to_string(),
            title: "Blog".to_string(),
            url: "https://a.example".to_string(),
            description: "old".to_string(),
            status: LinkStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let patch = LinkPatch {
            title: Some("Journal".to_string()),
            ..Default::default()
        };
        patch.apply(&mut link);
        assert_eq!(link.title, "Journal");
        assert_eq!(link.description, "old");
        assert_eq!(link.url, "https://a.example");
    }

    #[test]
    fn test_retired_link_is_not_visible() {
        let mut link = Link {
            id: "l1".to_string(),
            owner_id: "o1".to_string(),
            title: "Blog".to_string(),
            url: "https://a.example".to_string(),
            description: String::new(),
            status: LinkStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(link.is_visible());
        link.status = LinkStatus::Retired;
        assert!(!link.is_visible());
    }
}
