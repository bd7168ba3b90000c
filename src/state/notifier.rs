//! One-shot completion alerts for finished timers

use std::collections::HashSet;

use crate::audio::{AlertEvent, AlertSender};

use super::timer::{Timer, TimerId};

/// Tracks which timers have already alerted, so that a completion is
/// signaled exactly once even though the zero state is observed on every
/// subsequent snapshot.
#[derive(Debug)]
pub struct Notifier {
    /// Ids that have already triggered their completion alert
    notified: HashSet<TimerId>,
    alert_tx: AlertSender,
}

impl Notifier {
    /// Create a notifier that emits alerts on the given channel
    pub fn new(alert_tx: AlertSender) -> Self {
        Self {
            notified: HashSet::new(),
            alert_tx,
        }
    }

    /// Inspect the latest snapshot and alert once per newly finished timer
    ///
    /// Ids of removed timers are pruned from the tracking set, so the set
    /// never outgrows the live collection.
    pub fn observe(&mut self, timers: &[Timer]) {
        self.notified.retain(|id| timers.iter().any(|t| t.id == *id));

        for timer in timers {
            if timer.is_finished() && self.notified.insert(timer.id) {
                let event = AlertEvent::completion(&timer.label, timer.has_custom_label());
                // Alert delivery is best effort; a full or closed channel
                // is not an error
                let _ = self.alert_tx.try_send(event);
            }
        }
    }

    /// Number of ids currently tracked as notified
    pub fn notified_count(&self) -> usize {
        self.notified.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::registry::TimerRegistry;
    use tokio::sync::mpsc;

    fn notifier() -> (Notifier, mpsc::Receiver<AlertEvent>) {
        let (tx, rx) = mpsc::channel(16);
        (Notifier::new(tx), rx)
    }

    fn drain(rx: &mut mpsc::Receiver<AlertEvent>) -> Vec<AlertEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn finished_timer_alerts_exactly_once() {
        let (mut notifier, mut rx) = notifier();
        let mut registry = TimerRegistry::new();
        registry.add("Pasta", 1.0);

        for _ in 0..60 {
            registry.tick();
            notifier.observe(registry.timers());
        }
        assert_eq!(drain(&mut rx).len(), 1);

        // Many more observations of the same zero state stay silent
        for _ in 0..10 {
            registry.tick();
            notifier.observe(registry.timers());
        }
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn zero_duration_timer_alerts_immediately() {
        let (mut notifier, mut rx) = notifier();
        let mut registry = TimerRegistry::new();
        registry.add("", 0.0);

        notifier.observe(registry.timers());
        assert_eq!(drain(&mut rx), vec![AlertEvent::Tone]);
    }

    #[test]
    fn labeled_timer_speaks_and_default_timer_chimes() {
        let (mut notifier, mut rx) = notifier();
        let mut registry = TimerRegistry::new();
        registry.add("Pasta", 0.0);
        registry.add("  ", 0.0);

        notifier.observe(registry.timers());
        let events = drain(&mut rx);
        assert_eq!(
            events,
            vec![
                AlertEvent::Speak {
                    text: "Pasta has completed".to_string()
                },
                AlertEvent::Tone,
            ]
        );
    }

    #[test]
    fn running_timer_does_not_alert() {
        let (mut notifier, mut rx) = notifier();
        let mut registry = TimerRegistry::new();
        registry.add("Rice", 1.0);

        notifier.observe(registry.timers());
        registry.tick();
        notifier.observe(registry.timers());
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn removed_ids_are_pruned_from_tracking_set() {
        let (mut notifier, mut rx) = notifier();
        let mut registry = TimerRegistry::new();
        let id = registry.add("done", 0.0);

        notifier.observe(registry.timers());
        assert_eq!(notifier.notified_count(), 1);
        assert_eq!(drain(&mut rx).len(), 1);

        registry.remove(id);
        notifier.observe(registry.timers());
        assert_eq!(notifier.notified_count(), 0);
    }

    #[test]
    fn closed_channel_is_swallowed() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut notifier = Notifier::new(tx);

        let mut registry = TimerRegistry::new();
        registry.add("done", 0.0);

        // Must not panic, and the id is still marked notified
        notifier.observe(registry.timers());
        assert_eq!(notifier.notified_count(), 1);
    }
}
