use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderValue,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, error::ApiResult, main_lib::AppState};
use feedback_core::feedback::{Feedback, NewFeedback};

async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

async fn list_feedback(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Feedback>>> {
    let items = state.feedback_service.get_feedback()?;
    Ok(Json(items))
}

async fn create_feedback(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewFeedback>,
) -> ApiResult<Json<Feedback>> {
    let created = state
        .feedback_service
        .create_feedback(&payload.name, &payload.message)?;
    trigger_enrichment(state, &created);
    Ok(Json(created))
}

/// Kicks off webhook enrichment for a freshly stored record without
/// holding up the response. The spawned task outlives the request scope;
/// failures are logged and dropped.
fn trigger_enrichment(state: Arc<AppState>, item: &Feedback) {
    let enrichment_service = state.enrichment_service.clone();
    let feedback_id = item.id;
    let name = item.name.clone();
    let message = item.message.clone();
    tokio::spawn(async move {
        if let Err(err) = enrichment_service
            .enrich(feedback_id, &name, &message)
            .await
        {
            tracing::error!("Enrichment failed for feedback {}: {}", feedback_id, err);
        }
    });
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse::<HeaderValue>().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/ping", get(ping))
        .route("/api/feedback", get(list_feedback).post(create_feedback))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .with_state(state)
}
