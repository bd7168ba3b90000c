//! Pinch - A state-managed HTTP server for kitchen timers and cooking math
//!
//! This library provides a multi-timer registry with one-shot completion
//! alerts, plus stateless kitchen tools: unit conversion, recipe scaling,
//! a measurement reference, and ingredient substitutions.

pub mod api;
pub mod audio;
pub mod config;
pub mod state;
pub mod tasks;
pub mod tools;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::AppState;
pub use utils::signals::shutdown_signal;
