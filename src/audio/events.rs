//! Alert event types for timer completion

/// Events that can trigger an audible alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertEvent {
    /// Speak the completion phrase for a labeled timer
    /// e.g., "Pasta has completed"
    Speak { text: String },

    /// Short fixed-pitch chime for timers without a custom label
    Tone,
}

impl AlertEvent {
    /// Build the event for a finished timer with the given label
    pub fn completion(label: &str, custom: bool) -> Self {
        if custom {
            AlertEvent::Speak {
                text: format!("{} has completed", label),
            }
        } else {
            AlertEvent::Tone
        }
    }
}
