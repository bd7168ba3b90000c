//! Audio subsystem for timer completion alerts
//!
//! Provides spoken alerts for labeled timers and a short chime for
//! unlabeled ones. Delivery is best effort throughout.

pub mod events;
pub mod service;

pub use events::AlertEvent;
pub use service::{create_alert_channel, AlertSender, AlertService};
