//! Session domain model.
//!
//! Sessions are ephemeral and never persisted by this core; their lifecycle
//! is bounded by the external authenticator. The core only observes them to
//! drive the gate and to attach an owner to writes.

use serde::{Deserialize, Serialize};

/// An authenticated identity as reported by the external authenticator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Stable identity id; doubles as the profile id.
    pub identity_id: String,
    /// Contact address, when the authenticator knows one. Used only for
    /// handle-fallback derivation.
    pub contact_address: Option<String>,
}

impl Session {
    pub fn new(identity_id: impl Into<String>) -> Self {
        Self {
            identity_id: identity_id.into(),
            contact_address: None,
        }
    }

    pub fn with_contact_address(mut self, address: impl Into<String>) -> Self {
        self.contact_address = Some(address.into());
        self
    }

    /// The local-part of the contact address, if one is known.
    pub fn contact_local_part(&self) -> Option<&str> {
        self.contact_address
            .as_deref()
            .and_then(|a| a.split('@').next())
            .filter(|lp| !lp.is_empty())
    }
}

/// Session state as derived for a single navigation.
///
/// Derived fresh from the authenticator on every navigation; never cached
/// across requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SessionState {
    Authenticated(Session),
    #[default]
    Unauthenticated,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_local_part() {
        let session = Session::new("id-1").with_contact_address("alice@example.com");
        assert_eq!(session.contact_local_part(), Some("alice"));

        let bare = Session::new("id-2");
        assert_eq!(bare.contact_local_part(), None);

        let odd = Session::new("id-3").with_contact_address("@example.com");
        assert_eq!(odd.contact_local_part(), None);
    }

    #[test]
    fn test_session_state_accessors() {
        let state = SessionState::Authenticated(Session::new("id-1"));
        assert!(state.is_authenticated());
        assert_eq!(state.session().unwrap().identity_id, "id-1");
        assert!(!SessionState::Unauthenticated.is_authenticated());
    }
}
