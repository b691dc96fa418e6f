//! Profile domain model.
//!
//! A profile is the public identity behind a directory page. It is created
//! implicitly on first successful authentication and never deleted by this
//! core.

use crate::error::{LinkdeckError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum handle length in characters.
pub const HANDLE_MIN_LEN: usize = 3;
/// Maximum handle length in characters.
pub const HANDLE_MAX_LEN: usize = 30;

/// Public identity behind a directory page.
///
/// `id` is the stable identity assigned by the authenticator and never
/// changes; `handle` is the unique public-facing name and may be edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Opaque stable identifier, assigned at account creation. Immutable.
    pub id: String,
    /// Globally unique public handle, 3-30 chars of `[a-zA-Z0-9_-]`.
    pub handle: String,
    /// Optional display name shown on the public page.
    pub display_name: Option<String>,
    /// Public URL of the current avatar image, if one was uploaded.
    pub avatar_url: Option<String>,
    /// Contact address of the originating identity. Used only for
    /// fallback resolution of accounts that predate explicit handles.
    pub contact_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile with server-assigned timestamps.
    ///
    /// The handle is validated before construction; callers get a
    /// `Validation` error instead of a malformed profile.
    pub fn new(id: impl Into<String>, handle: impl Into<String>) -> Result<Self> {
        let handle = handle.into();
        validate_handle(&handle)?;
        let now = Utc::now();
        Ok(Self {
            id: id.into(),
            handle,
            display_name: None,
            avatar_url: None,
            contact_address: None,
            created_at: now,
            updated_at: now,
        })
    }
}

/// A partial update to a profile. Only supplied fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub handle: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Validates a public handle.
///
/// Handles are 3-30 characters from `[a-zA-Z0-9_-]`. Uniqueness is not
/// checked here; that is the store's contract (`Conflict` on write).
pub fn validate_handle(handle: &str) -> Result<()> {
    let len = handle.chars().count();
    if len < HANDLE_MIN_LEN || len > HANDLE_MAX_LEN {
        return Err(LinkdeckError::validation(
            "handle",
            format!(
                "must be {}-{} characters, got {}",
                HANDLE_MIN_LEN, HANDLE_MAX_LEN, len
            ),
        ));
    }
    if let Some(bad) = handle
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(LinkdeckError::validation(
            "handle",
            format!("invalid character '{}'", bad),
        ));
    }
    Ok(())
}

/// Derives a default handle from a contact address local-part.
///
/// Used when a profile is provisioned before the user picked a handle:
/// characters outside the handle charset are dropped, the result is
/// truncated to the maximum length, and inputs that cannot produce a
/// valid handle fall back to `"user"`.
pub fn derive_handle(local_part: &str) -> String {
    let sanitized: String = local_part
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(HANDLE_MAX_LEN)
        .collect();
    if sanitized.chars().count() < HANDLE_MIN_LEN {
        "user".to_string()
    } else {
        sanitized
    }
}
