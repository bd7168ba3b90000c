//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/timers", post(add_timer_handler).get(list_timers_handler))
        .route("/timers/:id/toggle", post(toggle_timer_handler))
        .route("/timers/:id", delete(remove_timer_handler))
        .route("/convert/volume", get(convert_volume_handler))
        .route("/convert/weight", get(convert_weight_handler))
        .route("/convert/temp", get(convert_temp_handler))
        .route("/scale", post(scale_handler))
        .route("/reference", get(reference_handler))
        .route("/substitutions", get(substitutions_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::create_alert_channel;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn app() -> Router {
        let (alert_tx, _alert_rx) = create_alert_channel();
        let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), alert_tx));
        create_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app().oneshot(get_req("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn timer_lifecycle_over_http() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json("/timers", r#"{"label":"Pasta","minutes":2}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let added = body_json(response).await;
        assert_eq!(added["timers"][0]["label"], "Pasta");
        assert_eq!(added["timers"][0]["display"], "2:00");
        let id = added["timers"][0]["id"].as_u64().unwrap();

        let response = app
            .clone()
            .oneshot(post_json(&format!("/timers/{}/toggle", id), ""))
            .await
            .unwrap();
        let toggled = body_json(response).await;
        assert_eq!(toggled["timers"][0]["running"], false);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/timers/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let removed = body_json(response).await;
        assert_eq!(removed["timers"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn add_clamps_out_of_range_minutes() {
        let app = app();
        let response = app
            .oneshot(post_json("/timers", r#"{"minutes":500}"#))
            .await
            .unwrap();
        let added = body_json(response).await;
        // Clamped to 120 minutes, default label applied
        assert_eq!(added["timers"][0]["total_seconds"], 7200);
        assert_eq!(added["timers"][0]["label"], "Timer");
    }

    #[tokio::test]
    async fn stale_toggle_returns_ok_without_changes() {
        let app = app();
        let response = app
            .oneshot(post_json("/timers/42/toggle", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let toggled = body_json(response).await;
        assert!(toggled["timers"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn convert_endpoint_converts_volume() {
        let response = app()
            .oneshot(get_req("/convert/volume?value=1&from=cup&to=ml"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let converted = body_json(response).await;
        assert!((converted["result"].as_f64().unwrap() - 236.588).abs() < 1e-6);
    }

    #[tokio::test]
    async fn scale_endpoint_scales_lines() {
        let response = app()
            .oneshot(post_json(
                "/scale",
                r#"{"from_servings":4,"to_servings":6,"lines":"2 cups flour\n2 eggs"}"#,
            ))
            .await
            .unwrap();
        let scaled = body_json(response).await;
        assert_eq!(scaled["lines"][0]["scaled"], "3 cups flour");
        assert!(scaled["lines"][1].get("scaled").is_none());
    }

    #[tokio::test]
    async fn substitutions_endpoint_filters() {
        let response = app()
            .oneshot(get_req("/substitutions?q=buttermilk"))
            .await
            .unwrap();
        let subs = body_json(response).await;
        assert!(!subs["matches"].as_array().unwrap().is_empty());
    }
}
