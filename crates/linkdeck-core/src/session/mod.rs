//! Session domain module.
//!
//! - `model`: the ephemeral `Session` and `SessionState` types
//! - `authenticator`: trait over the external credential/session provider
//! - `gate`: the navigation-time decision function and route classifier

mod authenticator;
mod gate;
mod model;

pub use authenticator::Authenticator;
pub use gate::{decide, GateDecision, RouteClass, RouteClassifier};
pub use model::{Session, SessionState};
