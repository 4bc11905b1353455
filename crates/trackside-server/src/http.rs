//! HTTP gateway — translates HTTP routes into RPC dispatch.
//!
//! Thin by design: each route names a method, forwards the decoded body or
//! path param as RPC params, and maps the RPC result onto an HTTP response.
//! A `get` miss becomes 404 here; inside the RPC layer it is a successful
//! `null`.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::metrics;
use crate::rpc::context::RpcContext;
use crate::rpc::errors::RpcError;
use crate::rpc::registry::MethodRegistry;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared gateway state.
#[derive(Clone)]
pub struct AppState {
    /// RPC context handed to every handler.
    pub ctx: Arc<RpcContext>,
    /// Method registry the routes dispatch into.
    pub registry: Arc<MethodRegistry>,
    /// Handle for rendering `/metrics`.
    pub metrics: PrometheusHandle,
}

/// Build the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/list-races", post(list_races))
        .route("/v1/list-events", post(list_events))
        .route("/v1/races/{id}", get(get_race))
        .route("/v1/events/{id}", get(get_event))
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

async fn list_races(State(state): State<AppState>, Json(params): Json<Value>) -> Response {
    dispatch_list(&state, "racing.list", params).await
}

async fn list_events(State(state): State<AppState>, Json(params): Json<Value>) -> Response {
    dispatch_list(&state, "sports.list", params).await
}

async fn get_race(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    dispatch_get(&state, "racing.get", id).await
}

async fn get_event(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    dispatch_get(&state, "sports.get", id).await
}

async fn health() -> &'static str {
    "ok"
}

async fn render_metrics(State(state): State<AppState>) -> String {
    metrics::render(&state.metrics)
}

async fn dispatch_list(state: &AppState, method: &str, params: Value) -> Response {
    match state.registry.dispatch(method, Some(params), &state.ctx).await {
        Ok(value) => Json(value).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn dispatch_get(state: &AppState, method: &str, id: i64) -> Response {
    let params = serde_json::json!({ "id": id });
    match state.registry.dispatch(method, Some(params), &state.ctx).await {
        Ok(Value::Null) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": { "code": "NOT_FOUND" } })),
        )
            .into_response(),
        Ok(value) => Json(value).into_response(),
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &RpcError) -> Response {
    let status = match err.code() {
        "INVALID_PARAMS" => StatusCode::BAD_REQUEST,
        "METHOD_NOT_FOUND" => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = serde_json::json!({
        "error": { "code": err.code(), "message": err.to_string() }
    });
    (status, Json(body)).into_response()
}
