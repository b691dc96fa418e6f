//! Authenticator trait.
//!
//! The credential/session provider is an external collaborator; this core
//! only observes established/revoked transitions and never stores
//! credentials of its own.

use super::model::{Session, SessionState};
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::watch;

/// Abstract session provider.
///
/// `subscribe` hands out an explicit change-notification channel instead of
/// ambient global state; the process-wide subscription's lifecycle (spawn
/// on start, tear down on shutdown) is owned by the application layer.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns the current session, if any.
    ///
    /// Callers derive state from this once per navigation and must not
    /// cache the answer across requests.
    async fn get_session(&self) -> Result<Option<Session>>;

    /// Revokes the current session.
    async fn sign_out(&self) -> Result<()>;

    /// Subscribes to session state transitions.
    fn subscribe(&self) -> watch::Receiver<SessionState>;
}
