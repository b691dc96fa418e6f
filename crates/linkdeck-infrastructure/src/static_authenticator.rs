//! In-process Authenticator implementation.

use async_trait::async_trait;
use linkdeck_core::session::{Authenticator, Session, SessionState};
use linkdeck_core::Result;
use tokio::sync::watch;

/// Authenticator double for local runs and tests.
///
/// Sessions are established and revoked by calling `set_session`; every
/// change is published through the watch channel so subscribers observe
/// the same transitions a real credential provider would emit.
pub struct StaticAuthenticator {
    state: watch::Sender<SessionState>,
}

impl StaticAuthenticator {
    /// Starts signed out.
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::Unauthenticated);
        Self { state }
    }

    /// Starts with an established session.
    pub fn signed_in(session: Session) -> Self {
        let (state, _) = watch::channel(SessionState::Authenticated(session));
        Self { state }
    }

    /// Establishes or revokes the current session.
    pub fn set_session(&self, session: Option<Session>) {
        let next = match session {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Unauthenticated,
        };
        // send_replace so the update sticks even with no live receivers.
        self.state.send_replace(next);
    }
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn get_session(&self) -> Result<Option<Session>> {
        Ok(self.state.borrow().session().cloned())
    }

    async fn sign_out(&self) -> Result<()> {
        self.state.send_replace(SessionState::Unauthenticated);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}
