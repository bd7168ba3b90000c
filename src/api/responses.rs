//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{format_time, Timer, TimerId};
use crate::tools::reference::Measure;
use crate::tools::scale::ScaledLine;
use crate::tools::substitutions::Substitution;

/// Read view of a single timer, with the formatted remaining time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    pub id: TimerId,
    pub label: String,
    pub total_seconds: u64,
    pub remaining_seconds: u64,
    pub running: bool,
    /// Remaining time as `M:SS` for direct display
    pub display: String,
}

impl From<&Timer> for TimerView {
    fn from(timer: &Timer) -> Self {
        Self {
            id: timer.id,
            label: timer.label.clone(),
            total_seconds: timer.total_seconds,
            remaining_seconds: timer.remaining_seconds,
            running: timer.running,
            display: format_time(timer.remaining_seconds),
        }
    }
}

/// Turn a registry snapshot into API views
pub fn timer_views(timers: &[Timer]) -> Vec<TimerView> {
    timers.iter().map(TimerView::from).collect()
}

/// Request body for creating a timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTimerRequest {
    #[serde(default)]
    pub label: String,
    pub minutes: f64,
}

/// API response structure for timer mutation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timers: Vec<TimerView>,
}

impl ApiResponse {
    /// Create a success response carrying the current timers
    pub fn ok(message: String, timers: &[Timer]) -> Self {
        Self {
            status: "ok".to_string(),
            message,
            timestamp: Utc::now(),
            timers: timer_views(timers),
        }
    }
}

/// Response for the timer list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimersResponse {
    pub timers: Vec<TimerView>,
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timers: Vec<TimerView>,
    pub timer_count: usize,
    pub uptime: String,
    pub port: u16,
    pub host: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Query parameters for the conversion endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertQuery<U> {
    pub value: f64,
    pub from: U,
    pub to: U,
}

/// Result of a unit conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResponse<U> {
    pub value: f64,
    pub from: U,
    pub to: U,
    pub result: f64,
}

/// Request body for recipe scaling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleRequest {
    pub from_servings: u32,
    pub to_servings: u32,
    /// Ingredient lines, one per line
    pub lines: String,
}

/// Scaled recipe lines
#[derive(Debug, Clone, Serialize)]
pub struct ScaleResponse {
    pub from_servings: u32,
    pub to_servings: u32,
    pub lines: Vec<ScaledLine>,
}

/// The measurement reference table
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceResponse {
    pub measurements: &'static [Measure],
}

/// Query parameters for substitution search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionsQuery {
    #[serde(default)]
    pub q: String,
}

/// Substitution search results
#[derive(Debug, Clone, Serialize)]
pub struct SubstitutionsResponse {
    pub matches: Vec<&'static Substitution>,
}
