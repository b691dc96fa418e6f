//! Process wiring.

use crate::account_usecase::AccountUsecase;
use crate::dashboard_usecase::DashboardUsecase;
use crate::directory_usecase::DirectoryUsecase;
use crate::navigation_usecase::NavigationUsecase;
use crate::session_monitor::SessionMonitor;
use linkdeck_core::avatar::AvatarService;
use linkdeck_core::config::LinkdeckConfig;
use linkdeck_core::session::{Authenticator, RouteClassifier};
use linkdeck_core::Result;
use linkdeck_infrastructure::{paths, FsObjectStorage, TomlLinkRepository, TomlProfileRepository};
use std::path::Path;
use std::sync::Arc;

/// The assembled application: every use case over the default file-backed
/// stack.
///
/// Built once at process start (inside a tokio runtime, since the session
/// monitor spawns its task here) and shut down once at process exit.
pub struct Linkdeck {
    pub navigation: NavigationUsecase,
    pub directory: DirectoryUsecase,
    pub account: Arc<AccountUsecase>,
    pub dashboard: DashboardUsecase,
    monitor: SessionMonitor,
}

impl Linkdeck {
    /// Wires the stack over `base_dir` with objects served from
    /// `public_base_url`.
    pub fn open(
        base_dir: impl AsRef<Path>,
        public_base_url: impl Into<String>,
        authenticator: Arc<dyn Authenticator>,
        config: LinkdeckConfig,
    ) -> Self {
        let base_dir = base_dir.as_ref();
        let profiles = Arc::new(TomlProfileRepository::new(base_dir));
        let links = Arc::new(TomlLinkRepository::new(base_dir));
        let objects = Arc::new(FsObjectStorage::new(
            base_dir.join("objects"),
            public_base_url,
        ));

        let account = Arc::new(AccountUsecase::new(profiles.clone()));
        let avatar_service = Arc::new(AvatarService::new(
            profiles.clone(),
            objects,
            config.avatar.clone(),
        ));
        let monitor = SessionMonitor::start(authenticator.as_ref());

        tracing::info!(base_dir = %base_dir.display(), "linkdeck opened");
        Self {
            navigation: NavigationUsecase::new(
                authenticator.clone(),
                RouteClassifier::new(config.routes.clone()),
            ),
            directory: DirectoryUsecase::new(profiles.clone(), links.clone()),
            account: account.clone(),
            dashboard: DashboardUsecase::new(account, links, avatar_service, authenticator),
            monitor,
        }
    }

    /// Wires the stack over the default data directory (`~/.linkdeck`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn open_default(
        public_base_url: impl Into<String>,
        authenticator: Arc<dyn Authenticator>,
        config: LinkdeckConfig,
    ) -> Result<Self> {
        Ok(Self::open(
            paths::default_data_dir()?,
            public_base_url,
            authenticator,
            config,
        ))
    }

    /// Tears down the session subscription.
    pub fn shutdown(self) {
        self.monitor.shutdown();
        tracing::info!("linkdeck shut down");
    }
}
