//! Public directory viewing.

use linkdeck_core::link::LinkRepository;
use linkdeck_core::profile::{DirectoryView, IdentityResolver, ProfileRepository};
use linkdeck_core::Result;
use std::sync::Arc;

/// The public read path: handle in, profile plus visible links out.
///
/// `NotFound` is the terminal "no such public page" outcome; callers never
/// receive partial data.
pub struct DirectoryUsecase {
    resolver: IdentityResolver,
}

impl DirectoryUsecase {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository>,
        link_repository: Arc<dyn LinkRepository>,
    ) -> Self {
        Self {
            resolver: IdentityResolver::new(profile_repository, link_repository),
        }
    }

    /// Resolves a public page by handle (or legacy fallback input).
    pub async fn view(&self, handle: &str) -> Result<DirectoryView> {
        self.resolver.resolve_directory(handle).await
    }
}
