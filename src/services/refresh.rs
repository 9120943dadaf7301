//! Periodic re-fetch of the displayed city.
//!
//! Auto-refresh is a timer-driven repeat of the same one-shot query. The
//! task is cancellable but never force-cancels an in-flight fetch: stopping
//! flips the active flag, the fetch is allowed to finish, and its result is
//! applied only if the flag was still set when it completed. That closes the
//! race where a stale response lands after the user turned refresh off.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::warn;

use crate::services::aggregator::Aggregator;
use crate::view::DashboardState;

/// Handle to a running auto-refresh task.
pub struct AutoRefresh {
    active: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl AutoRefresh {
    /// Whether the task is still applying results.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Stop refreshing. An in-flight fetch completes but its result is
    /// discarded.
    pub fn stop(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Wait for the task to wind down. Mostly useful in tests.
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}

/// Spawn a repeating fetch of `city` every `period`, applying each
/// successful reading to the shared dashboard state. The first fetch fires
/// immediately. Failed fetches leave the previous reading visible and
/// stale.
pub fn spawn_auto_refresh(
    aggregator: Arc<Aggregator>,
    city: String,
    period: Duration,
    state: Arc<Mutex<DashboardState>>,
) -> AutoRefresh {
    let active = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&active);

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if !flag.load(Ordering::SeqCst) {
                break;
            }

            let result = aggregator.fetch_environment(&city).await;

            // Cancelled while the fetch was in flight: discard the result.
            if !flag.load(Ordering::SeqCst) {
                break;
            }

            match result {
                Ok(reading) => state.lock().apply_reading(reading, Utc::now()),
                Err(e) => {
                    warn!(city = %city, error = %e, "auto-refresh fetch failed, keeping stale data")
                }
            }
        }
    });

    AutoRefresh { active, handle }
}
