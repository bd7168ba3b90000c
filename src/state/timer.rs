//! Timer entity and display formatting

use serde::{Deserialize, Serialize};

/// Unique timer identifier, assigned by the registry and never reused
pub type TimerId = u64;

/// Placeholder label for timers created without a usable label
pub const DEFAULT_LABEL: &str = "Timer";

/// A single countdown timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timer {
    /// Registry-assigned identifier, immutable after creation
    pub id: TimerId,
    /// Human-readable label; falls back to [`DEFAULT_LABEL`]
    pub label: String,
    /// Duration at creation, in seconds; immutable after creation
    pub total_seconds: u64,
    /// Seconds left; floored at zero, only ever decremented by the tick
    pub remaining_seconds: u64,
    /// Whether the tick advances this timer
    pub running: bool,
}

impl Timer {
    /// Create a new running timer with the full duration remaining
    pub fn new(id: TimerId, label: &str, total_seconds: u64) -> Self {
        Self {
            id,
            label: normalize_label(label),
            total_seconds,
            remaining_seconds: total_seconds,
            running: true,
        }
    }

    /// Check if the countdown has reached zero
    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Check if the user gave this timer a label of their own
    pub fn has_custom_label(&self) -> bool {
        self.label != DEFAULT_LABEL
    }
}

/// Trim a user-supplied label, substituting the placeholder when empty
fn normalize_label(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        DEFAULT_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a second count as `M:SS` with unpadded minutes
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
