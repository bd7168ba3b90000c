//! Tick driver background task

use std::{sync::Arc, time::Duration};
use tokio::sync::watch;
use tokio::time::interval;
use tracing::{error, info};

use crate::state::AppState;

/// Fixed cadence of the process-wide tick
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that advances all running timers once per second
///
/// Exactly one tick task exists for the lifetime of the process. Pausing an
/// individual timer is a flag on that timer, never a change to this cadence.
/// The task stops when the shutdown channel flips to true, so the repeating
/// tick never outlives its owner.
pub async fn tick_task(state: Arc<AppState>, mut shutdown_rx: watch::Receiver<bool>) {
    info!("Starting tick task at {:?} cadence", TICK_INTERVAL);

    let mut interval = interval(TICK_INTERVAL);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = state.tick() {
                    error!("Failed to advance timers: {}", e);
                }
            }

            result = shutdown_rx.changed() => {
                if result.is_err() || *shutdown_rx.borrow() {
                    info!("Shutdown requested, stopping tick task");
                    break;
                }
            }
        }
    }
}
