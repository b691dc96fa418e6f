//! Navigation gating.

use linkdeck_core::session::{decide, Authenticator, GateDecision, RouteClassifier, SessionState};
use linkdeck_core::Result;
use std::sync::Arc;

/// Outcome of one gated navigation.
#[derive(Debug, Clone)]
pub struct Navigation {
    /// Session state as derived for this navigation. Passed on so the
    /// caller can hand it to owner-scoped use cases without re-deriving.
    pub state: SessionState,
    pub decision: GateDecision,
    /// Landing path when the decision is a redirect.
    pub redirect_path: Option<String>,
}

impl Navigation {
    pub fn is_allowed(&self) -> bool {
        self.decision == GateDecision::Allow
    }
}

/// Evaluates the session gate for every navigation.
///
/// Session state is derived from the authenticator once per call and never
/// cached across requests; a revoked session is therefore enforced on the
/// next navigation. Redirects are decided without touching any store.
pub struct NavigationUsecase {
    authenticator: Arc<dyn Authenticator>,
    classifier: RouteClassifier,
}

impl NavigationUsecase {
    pub fn new(authenticator: Arc<dyn Authenticator>, classifier: RouteClassifier) -> Self {
        Self {
            authenticator,
            classifier,
        }
    }

    /// Gates a navigation to `path`.
    pub async fn navigate(&self, path: &str) -> Result<Navigation> {
        let state = match self.authenticator.get_session().await? {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Unauthenticated,
        };

        let route = self.classifier.classify(path);
        let decision = decide(&state, route);
        let redirect_path = match decision {
            GateDecision::Allow => None,
            GateDecision::RedirectTo(zone) => Some(self.classifier.landing_path(zone).to_string()),
        };
        tracing::debug!(
            path,
            authenticated = state.is_authenticated(),
            ?route,
            ?decision,
            "navigation gated"
        );

        Ok(Navigation {
            state,
            decision,
            redirect_path,
        })
    }
}
