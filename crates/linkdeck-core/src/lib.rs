//! Linkdeck core domain.
//!
//! The identity and link directory subsystem: resolving a public handle to
//! exactly one owner and their visible links, reconciling an authenticated
//! session's link set against persisted state, gating navigation on session
//! validity, and replacing avatar images across two external systems.
//!
//! Persistence, the credential provider and binary object storage are
//! external collaborators consumed through the traits in this crate;
//! concrete backends live in `linkdeck-infrastructure` and the use cases
//! wiring everything together live in `linkdeck-application`.

pub mod avatar;
pub mod config;
pub mod error;
pub mod link;
pub mod profile;
pub mod session;

// Re-export common error type
pub use error::{LinkdeckError, Result};
