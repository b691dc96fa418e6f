//! Configuration types for the Linkdeck core.
//!
//! Plain serde structs, loadable from a TOML document. Every field has a
//! default so an empty config file is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the core services.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LinkdeckConfig {
    #[serde(default)]
    pub avatar: AvatarConfig,
    #[serde(default)]
    pub routes: RouteConfig,
}

/// Limits applied to avatar uploads before any external call is made.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AvatarConfig {
    /// Maximum accepted image size in bytes.
    #[serde(default = "default_max_avatar_bytes")]
    pub max_bytes: usize,
    /// Accepted image content types.
    #[serde(default = "default_accepted_types")]
    pub accepted_types: Vec<String>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_avatar_bytes(),
            accepted_types: default_accepted_types(),
        }
    }
}

fn default_max_avatar_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_accepted_types() -> Vec<String> {
    ["image/png", "image/jpeg", "image/gif", "image/webp"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Path prefixes used by the route classifier.
///
/// Exact path strings are a presentation-layer concern; the core only needs
/// to know which prefixes belong to the owner dashboard and which paths are
/// the anonymous auth entry. Everything else is a public handle page.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RouteConfig {
    /// Prefixes reachable only by an authenticated owner.
    #[serde(default = "default_owner_prefixes")]
    pub owner_prefixes: Vec<String>,
    /// Paths reachable only while signed out (auth entry points).
    #[serde(default = "default_anonymous_paths")]
    pub anonymous_paths: Vec<String>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            owner_prefixes: default_owner_prefixes(),
            anonymous_paths: default_anonymous_paths(),
        }
    }
}

fn default_owner_prefixes() -> Vec<String> {
    vec!["/dashboard".to_string()]
}

fn default_anonymous_paths() -> Vec<String> {
    vec!["/".to_string(), "/auth".to_string()]
}
