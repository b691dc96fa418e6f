//! Linkdeck application layer.
//!
//! Use cases wiring the core together: navigation gating per request,
//! public directory viewing, account provisioning on first sign-in, the
//! owner dashboard, and the process-wide session monitor.

pub mod account_usecase;
pub mod bootstrap;
pub mod dashboard_usecase;
pub mod directory_usecase;
pub mod navigation_usecase;
pub mod session_monitor;

pub use account_usecase::AccountUsecase;
pub use bootstrap::Linkdeck;
pub use dashboard_usecase::{DashboardUsecase, DashboardView};
pub use directory_usecase::DirectoryUsecase;
pub use navigation_usecase::{Navigation, NavigationUsecase};
pub use session_monitor::SessionMonitor;
