//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::audio::AlertSender;

use super::{Notifier, Timer, TimerId, TimerRegistry};

/// Main application state that owns the timer registry and notifier
///
/// The registry is the single writer of timer state; every mutation goes
/// through [`AppState::update_registry`], which also runs the completion
/// notifier and publishes a fresh snapshot to subscribers. Tick-driven and
/// caller-driven mutations therefore serialize onto one timeline.
#[derive(Debug)]
pub struct AppState {
    /// Canonical timer collection
    pub registry: Arc<Mutex<TimerRegistry>>,
    /// One-shot completion alert tracking
    pub notifier: Arc<Mutex<Notifier>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Channel publishing a snapshot after every mutation
    pub snapshot_tx: watch::Sender<Vec<Timer>>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<Vec<Timer>>,
}

impl AppState {
    /// Create a new AppState with an empty registry
    pub fn new(port: u16, host: String, alert_tx: AlertSender) -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(Vec::new());

        Self {
            registry: Arc::new(Mutex::new(TimerRegistry::new())),
            notifier: Arc::new(Mutex::new(Notifier::new(alert_tx))),
            start_time: Instant::now(),
            port,
            host,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Apply a mutation to the registry, run the notifier over the result,
    /// and publish the new snapshot
    pub fn update_registry<F>(&self, action: &str, updater: F) -> Result<Vec<Timer>, String>
    where
        F: FnOnce(&mut TimerRegistry),
    {
        // Lock the registry and apply the update
        let mut registry = self
            .registry
            .lock()
            .map_err(|e| format!("Failed to lock timer registry: {}", e))?;

        updater(&mut registry);
        let snapshot = registry.snapshot();

        // Observe completions and publish while the registry lock is held,
        // so alerts and snapshots follow mutation order
        if let Ok(mut notifier) = self.notifier.lock() {
            notifier.observe(&snapshot);
        }
        if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
            warn!("Failed to publish registry snapshot after {}: {}", action, e);
        }

        Ok(snapshot)
    }

    /// Add a new timer and return its id
    pub fn add_timer(&self, label: &str, minutes: f64) -> Result<TimerId, String> {
        info!("Adding timer '{}' for {} minutes", label.trim(), minutes);
        let mut id = 0;
        self.update_registry("add", |registry| {
            id = registry.add(label, minutes);
        })?;
        Ok(id)
    }

    /// Flip the run/pause flag of a timer
    pub fn toggle_timer(&self, id: TimerId) -> Result<Vec<Timer>, String> {
        info!("Toggling timer {}", id);
        self.update_registry("toggle", |registry| registry.toggle(id))
    }

    /// Remove a timer from the registry
    pub fn remove_timer(&self, id: TimerId) -> Result<Vec<Timer>, String> {
        info!("Removing timer {}", id);
        self.update_registry("remove", |registry| registry.remove(id))
    }

    /// Advance all running timers by one second
    ///
    /// Called by the tick task only, never by API handlers.
    pub fn tick(&self) -> Result<(), String> {
        self.update_registry("tick", |registry| registry.tick())?;
        Ok(())
    }

    /// Get the current timers in insertion order
    pub fn list_timers(&self) -> Result<Vec<Timer>, String> {
        self.registry
            .lock()
            .map(|registry| registry.snapshot())
            .map_err(|e| format!("Failed to lock timer registry: {}", e))
    }

    /// Subscribe to registry snapshots
    ///
    /// The receiver yields the post-mutation collection after every add,
    /// toggle, remove, and tick.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Timer>> {
        self.snapshot_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{create_alert_channel, AlertEvent};
    use tokio::sync::mpsc;

    fn state() -> (Arc<AppState>, mpsc::Receiver<AlertEvent>) {
        let (alert_tx, alert_rx) = create_alert_channel();
        (
            Arc::new(AppState::new(0, "127.0.0.1".to_string(), alert_tx)),
            alert_rx,
        )
    }

    #[tokio::test]
    async fn mutations_publish_snapshots_to_subscribers() {
        let (state, _alert_rx) = state();
        let mut rx = state.subscribe();

        let id = state.add_timer("Pasta", 1.0).unwrap();
        rx.changed().await.unwrap();
        {
            let snapshot = rx.borrow();
            assert_eq!(snapshot.len(), 1);
            assert!(snapshot[0].running);
        }

        state.toggle_timer(id).unwrap();
        rx.changed().await.unwrap();
        assert!(!rx.borrow()[0].running);

        state.remove_timer(id).unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_empty());
    }

    #[tokio::test]
    async fn tick_drives_countdown_and_alerts_once() {
        let (state, mut alert_rx) = state();
        state.add_timer("Pasta", 1.0).unwrap();

        for _ in 0..61 {
            state.tick().unwrap();
        }

        let timers = state.list_timers().unwrap();
        assert_eq!(timers[0].remaining_seconds, 0);

        assert_eq!(
            alert_rx.try_recv(),
            Ok(AlertEvent::Speak {
                text: "Pasta has completed".to_string()
            })
        );
        assert!(alert_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn stale_ids_are_tolerated() {
        let (state, _alert_rx) = state();
        let id = state.add_timer("gone", 1.0).unwrap();
        state.remove_timer(id).unwrap();

        // Races between UI actions and removal are no-ops, not errors
        state.toggle_timer(id).unwrap();
        state.remove_timer(id).unwrap();
        assert!(state.list_timers().unwrap().is_empty());
    }
}
