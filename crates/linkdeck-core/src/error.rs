//! Error types for the Linkdeck core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Linkdeck core.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum LinkdeckError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A mutation was attempted by a session that does not own the target
    #[error("Not the owner of link '{link_id}'")]
    NotOwner { link_id: String },

    /// Input rejected before any external call was made
    #[error("Validation failed for {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Uniqueness violated on write (e.g. duplicate handle)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A store or object-storage call failed; this core does not retry
    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinkdeckError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a NotOwner error
    pub fn not_owner(link_id: impl Into<String>) -> Self {
        Self::NotOwner {
            link_id: link_id.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an Upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a NotOwner error
    pub fn is_not_owner(&self) -> bool {
        matches!(self, Self::NotOwner { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a Conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Check if this is an Upstream error
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for LinkdeckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for LinkdeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for LinkdeckError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for LinkdeckError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for LinkdeckError {
    fn from(err: url::ParseError) -> Self {
        Self::Validation {
            field: "url",
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error at the infrastructure seam.
impl From<anyhow::Error> for LinkdeckError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, LinkdeckError>`.
pub type Result<T> = std::result::Result<T, LinkdeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = LinkdeckError::not_found("profile", "alice");
        assert_eq!(err.to_string(), "Entity not found: profile 'alice'");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_url_parse_error_maps_to_validation() {
        let err: LinkdeckError = url::ParseError::RelativeUrlWithoutBase.into();
        assert!(err.is_validation());
    }

    #[test]
    fn test_predicates_are_disjoint() {
        let err = LinkdeckError::conflict("handle 'alice' is taken");
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
        assert!(!err.is_upstream());
    }
}
