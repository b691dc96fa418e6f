//! Link domain module.
//!
//! - `model`: the `Link` domain model and its two-state lifecycle
//! - `repository`: repository trait for link persistence
//! - `directory`: owner-scoped add/edit/retire operations over a cached
//!   newest-first view

mod directory;
mod model;
mod repository;

pub use directory::LinkDirectoryManager;
pub use model::{Link, LinkDraft, LinkPatch, LinkStatus};
pub use repository::LinkRepository;
