//! Graceful shutdown handling for the headless binaries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tracing::info;

/// Cooperative shutdown flag: true while the process should keep running.
pub struct ShutdownSignal {
    running: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Spawn a Ctrl+C listener that flips the flag.
    pub fn listen_for_ctrl_c(&self) {
        let running = Arc::clone(&self.running);
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("Received shutdown signal (Ctrl+C)");
                running.store(false, Ordering::Release);
            }
        });
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Request shutdown from within the process.
    pub fn trigger(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Clone of the flag for handing to background tasks.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Sleep in small steps so a shutdown request cuts the wait short.
    pub async fn sleep_unless_stopped(&self, duration: Duration) {
        let step = Duration::from_millis(50);
        let mut waited = Duration::ZERO;
        while waited < duration && self.is_running() {
            tokio::time::sleep(step.min(duration - waited)).await;
            waited += step;
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
