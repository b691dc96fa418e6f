//! Owner dashboard.

use crate::account_usecase::AccountUsecase;
use linkdeck_core::avatar::AvatarService;
use linkdeck_core::link::{Link, LinkDirectoryManager, LinkRepository};
use linkdeck_core::profile::Profile;
use linkdeck_core::session::{Authenticator, Session};
use linkdeck_core::Result;
use std::sync::Arc;

/// An opened dashboard: the owner's profile, their directory manager, and
/// the initial link view.
pub struct DashboardView {
    pub profile: Profile,
    /// Scoped to this session's owner; lives as long as the dashboard.
    pub manager: Arc<LinkDirectoryManager>,
    /// Active links, newest first, as loaded on open.
    pub links: Vec<Link>,
}

/// The authenticated owner surface.
///
/// Session state is passed into every call explicitly; nothing here holds
/// ambient "current user" state. The gate has already run by the time a
/// dashboard is opened.
pub struct DashboardUsecase {
    account: Arc<AccountUsecase>,
    link_repository: Arc<dyn LinkRepository>,
    avatar_service: Arc<AvatarService>,
    authenticator: Arc<dyn Authenticator>,
}

impl DashboardUsecase {
    pub fn new(
        account: Arc<AccountUsecase>,
        link_repository: Arc<dyn LinkRepository>,
        avatar_service: Arc<AvatarService>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            account,
            link_repository,
            avatar_service,
            authenticator,
        }
    }

    /// Opens the dashboard for a session, provisioning the profile on
    /// first sign-in.
    pub async fn open(&self, session: &Session) -> Result<DashboardView> {
        let profile = self.account.ensure_profile(session).await?;
        let manager = Arc::new(LinkDirectoryManager::new(
            profile.id.clone(),
            self.link_repository.clone(),
        ));
        let links = manager.list().await?;
        tracing::debug!(owner_id = %profile.id, links = links.len(), "dashboard opened");
        Ok(DashboardView {
            profile,
            manager,
            links,
        })
    }

    /// Replaces the session owner's avatar and returns the new URL.
    pub async fn replace_avatar(
        &self,
        session: &Session,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String> {
        self.avatar_service
            .replace(&session.identity_id, bytes, content_type)
            .await
    }

    /// Revokes the current session. The next gate evaluation enforces the
    /// new state.
    pub async fn sign_out(&self) -> Result<()> {
        self.authenticator.sign_out().await?;
        tracing::info!("signed out");
        Ok(())
    }
}
