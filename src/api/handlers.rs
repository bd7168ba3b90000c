//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, TimerId};
use crate::tools::{
    convert::{convert_temp, convert_volume, convert_weight, TempUnit, VolumeUnit, WeightUnit},
    reference::MEASUREMENTS,
    scale::scale_lines,
    substitutions,
};
use super::responses::{
    AddTimerRequest, ApiResponse, ConversionResponse, ConvertQuery, HealthResponse,
    ReferenceResponse, ScaleRequest, ScaleResponse, StatusResponse, SubstitutionsQuery,
    SubstitutionsResponse, TimersResponse, timer_views,
};

/// Lowest accepted timer duration in minutes
const MIN_MINUTES: f64 = 1.0;
/// Highest accepted timer duration in minutes
const MAX_MINUTES: f64 = 120.0;

/// Handle POST /timers - Create a new timer
pub async fn add_timer_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddTimerRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    // The registry trusts its callers; range validation happens here
    let minutes = request.minutes.clamp(MIN_MINUTES, MAX_MINUTES);

    let id = match state.add_timer(&request.label, minutes) {
        Ok(id) => id,
        Err(e) => {
            error!("Failed to add timer: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match state.list_timers() {
        Ok(timers) => {
            info!("Timer {} added via API", id);
            Ok(Json(ApiResponse::ok(format!("Timer {} added", id), &timers)))
        }
        Err(e) => {
            error!("Failed to read timers after add: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timers/:id/toggle - Flip a timer's run/pause flag
///
/// Unknown ids are tolerated silently; the UI may race against removal.
pub async fn toggle_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TimerId>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.toggle_timer(id) {
        Ok(timers) => {
            info!("Toggle endpoint called for timer {}", id);
            Ok(Json(ApiResponse::ok(format!("Timer {} toggled", id), &timers)))
        }
        Err(e) => {
            error!("Failed to toggle timer {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle DELETE /timers/:id - Remove a timer
///
/// Unknown ids are tolerated silently, same as toggle.
pub async fn remove_timer_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TimerId>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.remove_timer(id) {
        Ok(timers) => {
            info!("Remove endpoint called for timer {}", id);
            Ok(Json(ApiResponse::ok(format!("Timer {} removed", id), &timers)))
        }
        Err(e) => {
            error!("Failed to remove timer {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /timers - Current timers in insertion order
pub async fn list_timers_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TimersResponse>, StatusCode> {
    match state.list_timers() {
        Ok(timers) => Ok(Json(TimersResponse {
            timers: timer_views(&timers),
        })),
        Err(e) => {
            error!("Failed to list timers: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return current timers and server metadata
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let timers = match state.list_timers() {
        Ok(timers) => timers,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(Json(StatusResponse {
        timer_count: timers.len(),
        timers: timer_views(&timers),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handle GET /convert/volume
pub async fn convert_volume_handler(
    Query(query): Query<ConvertQuery<VolumeUnit>>,
) -> Json<ConversionResponse<VolumeUnit>> {
    Json(ConversionResponse {
        value: query.value,
        from: query.from,
        to: query.to,
        result: convert_volume(query.value, query.from, query.to),
    })
}

/// Handle GET /convert/weight
pub async fn convert_weight_handler(
    Query(query): Query<ConvertQuery<WeightUnit>>,
) -> Json<ConversionResponse<WeightUnit>> {
    Json(ConversionResponse {
        value: query.value,
        from: query.from,
        to: query.to,
        result: convert_weight(query.value, query.from, query.to),
    })
}

/// Handle GET /convert/temp
pub async fn convert_temp_handler(
    Query(query): Query<ConvertQuery<TempUnit>>,
) -> Json<ConversionResponse<TempUnit>> {
    Json(ConversionResponse {
        value: query.value,
        from: query.from,
        to: query.to,
        result: convert_temp(query.value, query.from, query.to),
    })
}

/// Handle POST /scale - Scale recipe lines by a servings ratio
pub async fn scale_handler(Json(request): Json<ScaleRequest>) -> Json<ScaleResponse> {
    let lines = scale_lines(&request.lines, request.from_servings, request.to_servings);
    Json(ScaleResponse {
        from_servings: request.from_servings,
        to_servings: request.to_servings,
        lines,
    })
}

/// Handle GET /reference - The static measurement table
pub async fn reference_handler() -> Json<ReferenceResponse> {
    Json(ReferenceResponse {
        measurements: MEASUREMENTS,
    })
}

/// Handle GET /substitutions - Search the substitution table
pub async fn substitutions_handler(
    Query(query): Query<SubstitutionsQuery>,
) -> Json<SubstitutionsResponse> {
    Json(SubstitutionsResponse {
        matches: substitutions::search(&query.q),
    })
}
