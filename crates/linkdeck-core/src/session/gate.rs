//! Navigation-time session gating.
//!
//! A small state machine over two session states and three route classes.
//! It re-evaluates on every navigation event for the life of the process;
//! there is no terminal state and no caching across requests, so a revoked
//! session is enforced on the very next navigation.

use super::model::SessionState;
use crate::config::RouteConfig;
use serde::{Deserialize, Serialize};

/// The three logical zones a path can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RouteClass {
    /// Handle pages, readable by anyone.
    Public,
    /// Auth entry points, reachable only while signed out.
    AnonymousOnly,
    /// The dashboard, reachable only by an authenticated owner.
    OwnerOnly,
}

/// Outcome of a gate evaluation.
///
/// Redirects are silent: no error, just navigation to the other zone's
/// landing point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    RedirectTo(RouteClass),
}

/// Decides whether a navigation is allowed.
///
/// | Session state   | Target zone   | Action                     |
/// |-----------------|---------------|----------------------------|
/// | Unauthenticated | OwnerOnly     | redirect to AnonymousOnly  |
/// | Authenticated   | AnonymousOnly | redirect to OwnerOnly      |
/// | any             | Public        | allow                      |
/// | Authenticated   | OwnerOnly     | allow                      |
/// | Unauthenticated | AnonymousOnly | allow                      |
pub fn decide(state: &SessionState, route: RouteClass) -> GateDecision {
    match (state.is_authenticated(), route) {
        (_, RouteClass::Public) => GateDecision::Allow,
        (false, RouteClass::OwnerOnly) => GateDecision::RedirectTo(RouteClass::AnonymousOnly),
        (true, RouteClass::AnonymousOnly) => GateDecision::RedirectTo(RouteClass::OwnerOnly),
        (true, RouteClass::OwnerOnly) | (false, RouteClass::AnonymousOnly) => GateDecision::Allow,
    }
}

/// Maps path strings to route classes.
///
/// Exact path strings are a presentation-layer concern; the classifier is
/// configured with owner prefixes and anonymous entry paths and treats
/// everything else as a public handle page.
#[derive(Debug, Clone)]
pub struct RouteClassifier {
    routes: RouteConfig,
}

impl RouteClassifier {
    pub fn new(routes: RouteConfig) -> Self {
        Self { routes }
    }

    /// Classifies a path into one of the three zones.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self
            .routes
            .owner_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
        {
            return RouteClass::OwnerOnly;
        }
        if self.routes.anonymous_paths.iter().any(|p| p == path) {
            return RouteClass::AnonymousOnly;
        }
        RouteClass::Public
    }

    /// The landing path for a redirect target zone.
    pub fn landing_path(&self, zone: RouteClass) -> &str {
        match zone {
            RouteClass::OwnerOnly => self
                .routes
                .owner_prefixes
                .first()
                .map(String::as_str)
                .unwrap_or("/dashboard"),
            RouteClass::AnonymousOnly => self
                .routes
                .anonymous_paths
                .first()
                .map(String::as_str)
                .unwrap_or("/"),
            RouteClass::Public => "/",
        }
    }
}

impl Default for RouteClassifier {
    fn default() -> Self {
        Self::new(RouteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::model::Session;

    fn authenticated() -> SessionState {
        SessionState::Authenticated(Session::new("id-1"))
    }

    #[test]
    fn test_decision_table() {
        let unauthenticated = SessionState::Unauthenticated;
        assert_eq!(
            decide(&unauthenticated, RouteClass::OwnerOnly),
            GateDecision::RedirectTo(RouteClass::AnonymousOnly)
        );
        assert_eq!(
            decide(&authenticated(), RouteClass::AnonymousOnly),
            GateDecision::RedirectTo(RouteClass::OwnerOnly)
        );
        assert_eq!(decide(&unauthenticated, RouteClass::Public), GateDecision::Allow);
        assert_eq!(decide(&authenticated(), RouteClass::Public), GateDecision::Allow);
        assert_eq!(decide(&authenticated(), RouteClass::OwnerOnly), GateDecision::Allow);
        assert_eq!(
            decide(&unauthenticated, RouteClass::AnonymousOnly),
            GateDecision::Allow
        );
    }

    #[test]
    fn test_default_classifier() {
        let classifier = RouteClassifier::default();
        assert_eq!(classifier.classify("/dashboard"), RouteClass::OwnerOnly);
        assert_eq!(classifier.classify("/dashboard/settings"), RouteClass::OwnerOnly);
        assert_eq!(classifier.classify("/"), RouteClass::AnonymousOnly);
        assert_eq!(classifier.classify("/auth"), RouteClass::AnonymousOnly);
        assert_eq!(classifier.classify("/alice"), RouteClass::Public);
    }

    #[test]
    fn test_landing_paths() {
        let classifier = RouteClassifier::default();
        assert_eq!(classifier.landing_path(RouteClass::OwnerOnly), "/dashboard");
        assert_eq!(classifier.landing_path(RouteClass::AnonymousOnly), "/");
    }
}
