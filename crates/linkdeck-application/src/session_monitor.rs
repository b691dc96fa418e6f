//! Process-wide session subscription.

use linkdeck_core::session::{Authenticator, SessionState};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Observes session transitions for the life of the process.
///
/// One monitor is started at process init and torn down at shutdown;
/// use cases still receive session state explicitly per call, the monitor
/// only logs transitions and offers the latest state for diagnostics.
pub struct SessionMonitor {
    receiver: watch::Receiver<SessionState>,
    task: JoinHandle<()>,
}

impl SessionMonitor {
    /// Subscribes to the authenticator and spawns the logging task.
    pub fn start(authenticator: &dyn Authenticator) -> Self {
        let receiver = authenticator.subscribe();
        let mut task_receiver = receiver.clone();
        let task = tokio::spawn(async move {
            while task_receiver.changed().await.is_ok() {
                let authenticated = task_receiver.borrow_and_update().is_authenticated();
                if authenticated {
                    tracing::info!("session established");
                } else {
                    tracing::info!("session revoked");
                }
            }
        });
        Self { receiver, task }
    }

    /// The latest observed session state.
    pub fn current(&self) -> SessionState {
        self.receiver.borrow().clone()
    }

    /// Tears the subscription down.
    pub fn shutdown(self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdeck_core::session::Session;
    use linkdeck_infrastructure::StaticAuthenticator;
    use std::time::Duration;

    #[tokio::test]
    async fn test_monitor_tracks_transitions() {
        let auth = StaticAuthenticator::new();
        let monitor = SessionMonitor::start(&auth);
        assert!(!monitor.current().is_authenticated());

        auth.set_session(Some(Session::new("id-1")));
        // watch delivers synchronously to the receiver; the spawned task
        // only logs, so current() is immediately up to date.
        assert!(monitor.current().is_authenticated());

        auth.set_session(None);
        assert!(!monitor.current().is_authenticated());

        monitor.shutdown();
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
