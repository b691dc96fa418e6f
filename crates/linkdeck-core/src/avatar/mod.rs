//! Avatar assignment module.
//!
//! - `storage`: trait over the external binary object store
//! - `service`: upload-new, repoint, then best-effort delete of the old
//!   object

mod service;
mod storage;

pub use service::AvatarService;
pub use storage::ObjectStorage;
