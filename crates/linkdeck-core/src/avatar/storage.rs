//! Object storage trait.

use crate::error::Result;
use async_trait::async_trait;

/// Abstract binary object store for avatar images.
///
/// The store shares no transaction with the record store; callers sequence
/// their writes so a profile never points at a nonexistent object.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores bytes under a path and returns the public URL.
    async fn put(&self, path: &str, bytes: &[u8], content_type: &str) -> Result<String>;

    /// Deletes the object at a path. Deleting a missing object is not an
    /// error.
    async fn delete(&self, path: &str) -> Result<()>;

    /// The public URL an object at this path would be served from.
    fn public_url(&self, path: &str) -> String;
}
