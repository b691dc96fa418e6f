//! Persistence DTOs for the TOML repositories.
//!
//! At-rest records mirror the original store's row shapes (timestamps as
//! RFC 3339 strings, visibility as a plain `is_active` flag); conversions
//! map them onto the richer domain types.

use chrono::{DateTime, Utc};
use linkdeck_core::link::{Link, LinkStatus};
use linkdeck_core::profile::Profile;
use linkdeck_core::{LinkdeckError, Result};
use serde::{Deserialize, Serialize};

/// Root document of `profiles.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilesDocument {
    #[serde(default, rename = "profile")]
    pub profiles: Vec<ProfileRecord>,
}

/// One row of the `profiles` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    pub handle: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub contact_address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Profile> for ProfileRecord {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            handle: profile.handle.clone(),
            display_name: profile.display_name.clone(),
            avatar_url: profile.avatar_url.clone(),
            contact_address: profile.contact_address.clone(),
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
        }
    }
}

impl TryFrom<&ProfileRecord> for Profile {
    type Error = LinkdeckError;

    fn try_from(record: &ProfileRecord) -> Result<Profile> {
        Ok(Profile {
            id: record.id.clone(),
            handle: record.handle.clone(),
            display_name: record.display_name.clone(),
            avatar_url: record.avatar_url.clone(),
            contact_address: record.contact_address.clone(),
            created_at: parse_timestamp(&record.created_at)?,
            updated_at: parse_timestamp(&record.updated_at)?,
        })
    }
}

/// Root document of `links.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksDocument {
    #[serde(default, rename = "link")]
    pub links: Vec<LinkRecord>,
}

/// One row of the `links` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

fn default_active() -> bool {
    true
}

impl From<&Link> for LinkRecord {
    fn from(link: &Link) -> Self {
        Self {
            id: link.id.clone(),
            owner_id: link.owner_id.clone(),
            title: link.title.clone(),
            url: link.url.clone(),
            description: link.description.clone(),
            is_active: link.status == LinkStatus::Active,
            created_at: link.created_at.to_rfc3339(),
            updated_at: link.updated_at.to_rfc3339(),
        }
    }
}

impl TryFrom<&LinkRecord> for Link {
    type Error = LinkdeckError;

    fn try_from(record: &LinkRecord) -> Result<Link> {
        Ok(Link {
            id: record.id.clone(),
            owner_id: record.owner_id.clone(),
            title: record.title.clone(),
            url: record.url.clone(),
            description: record.description.clone(),
            status: if record.is_active {
                LinkStatus::Active
            } else {
                LinkStatus::Retired
            },
            created_at: parse_timestamp(&record.created_at)?,
            updated_at: parse_timestamp(&record.updated_at)?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| LinkdeckError::Serialization {
            format: "RFC3339".to_string(),
            message: format!("'{}': {}", value, e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_record_round_trip() {
        let now = Utc::now();
        let link = Link {
            id: "l1".to_string(),
            owner_id: "p1".to_string(),
            title: "Blog".to_string(),
            url: "https://a.example".to_string(),
            description: String::new(),
            status: LinkStatus::Retired,
            created_at: now,
            updated_at: now,
        };
        let record = LinkRecord::from(&link);
        assert!(!record.is_active);
        let back = Link::try_from(&record).unwrap();
        assert_eq!(back, link);
    }

    #[test]
    fn test_bad_timestamp_is_serialization_error() {
        let record = ProfileRecord {
            id: "p1".to_string(),
            handle: "alice".to_string(),
            display_name: None,
            avatar_url: None,
            contact_address: None,
            created_at: "not-a-date".to_string(),
            updated_at: "not-a-date".to_string(),
        };
        assert!(Profile::try_from(&record).is_err());
    }
}
