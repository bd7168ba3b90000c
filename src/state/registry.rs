//! Timer registry structure and management

use super::timer::{Timer, TimerId};

/// In-memory collection of countdown timers, insertion-ordered
///
/// The registry is the single writer of timer state. Callers mutate it only
/// through the operations below; the one-second tick is the only path that
/// advances countdowns.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    timers: Vec<Timer>,
    next_id: TimerId,
}

impl TimerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a new running timer and return its id
    ///
    /// The registry does not validate the minutes range; callers are
    /// expected to clamp user input before calling.
    pub fn add(&mut self, label: &str, minutes: f64) -> TimerId {
        let total_seconds = (minutes * 60.0).round() as u64;
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(Timer::new(id, label, total_seconds));
        id
    }

    /// Flip the run/pause flag of a timer; unknown ids are ignored
    pub fn toggle(&mut self, id: TimerId) {
        if let Some(timer) = self.timers.iter_mut().find(|t| t.id == id) {
            timer.running = !timer.running;
        }
    }

    /// Remove a timer, keeping the relative order of the rest; unknown ids
    /// are ignored
    pub fn remove(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    /// Advance every running, non-exhausted timer by one second
    pub fn tick(&mut self) {
        for timer in &mut self.timers {
            if timer.running && timer.remaining_seconds > 0 {
                timer.remaining_seconds -= 1;
            }
        }
    }

    /// Current timers in insertion order
    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    /// Owned copy of the current collection, for publication to observers
    pub fn snapshot(&self) -> Vec<Timer> {
        self.timers.clone()
    }

    /// Number of timers currently in the registry
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Check if the registry holds no timers
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
