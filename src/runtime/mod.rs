//! Kiosk runtime lifecycle.
//!
//! Starts the clock and the poller together and tears them down together.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::clock::spawn_clock;
use crate::cms::ContentSource;
use crate::config::Config;
use crate::poller::spawn_poller;
use crate::state::KioskState;

/// Handles of the two periodic tasks.
pub struct KioskRuntime {
    state: Arc<KioskState>,
    clock: JoinHandle<()>,
    poller: JoinHandle<()>,
}

impl KioskRuntime {
    pub fn start(state: Arc<KioskState>, source: Arc<dyn ContentSource>, config: &Config) -> Self {
        tracing::info!(
            "Starting clock ({:?}) and poller ({:?})",
            config.tick_interval,
            config.poll_interval
        );

        let clock = spawn_clock(Arc::clone(&state), config.tick_interval);
        let poller = spawn_poller(Arc::clone(&state), source, config.poll_interval);

        Self {
            state,
            clock,
            poller,
        }
    }

    /// Cancel both timers. In-flight polls complete but are ignored.
    pub async fn shutdown(self) {
        self.state.cancel();
        self.clock.abort();
        self.poller.abort();

        for (name, handle) in [("clock", self.clock), ("poller", self.poller)] {
            match handle.await {
                Err(e) if e.is_panic() => tracing::error!("{} task panicked: {}", name, e),
                _ => tracing::debug!("{} task stopped", name),
            }
        }
        tracing::info!("Kiosk runtime stopped");
    }
}
