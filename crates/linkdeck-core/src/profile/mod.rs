//! Profile domain module.
//!
//! Everything about the public identity behind a directory page:
//!
//! - `model`: the `Profile` domain model, handle validation and derivation
//! - `repository`: repository trait for profile persistence
//! - `resolver`: maps a public handle (or fallback input) to a profile and
//!   its visible links

mod model;
mod repository;
mod resolver;

pub use model::{
    derive_handle, validate_handle, Profile, ProfilePatch, HANDLE_MAX_LEN, HANDLE_MIN_LEN,
};
pub use repository::ProfileRepository;
pub use resolver::{DirectoryView, IdentityResolver, Resolution};
