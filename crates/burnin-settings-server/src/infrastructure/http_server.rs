//! HTTP gateway: routing, CORS, and the serve loop.
//!
//! This module is responsible for:
//!
//! 1. Binding a TCP listener on the configured address.
//! 2. Routing `GET /load` and `POST /save` to the application use-cases.
//! 3. Answering `OPTIONS` preflight probes on any path with 204 No Content.
//! 4. Answering every unknown route with the JSON not-found envelope.
//! 5. Stamping `Access-Control-Allow-Origin: *` on **every** response so the
//!    editor can be served from a file:// page or any dev origin.
//! 6. Shutting down gracefully on Ctrl+C.
//!
//! The gateway is deliberately thin: it decodes bytes, calls the use-cases,
//! and maps their results to status codes.  All document logic lives behind
//! that boundary.
//!
//! # Error reporting
//!
//! Request-level failures (undecodable body, unreadable store) are caught
//! here and reported as `{"ok": false, "error": ...}` with a 500 status.
//! The process itself never exits on a bad request.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::application::settings_service;
use crate::domain::config::ServerConfig;
use crate::domain::messages::GatewayReply;
use crate::infrastructure::store::SettingsStore;

// ── Public API ────────────────────────────────────────────────────────────────

/// Binds the listener and serves requests until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (e.g., the port is
/// already in use) or the serve loop fails irrecoverably.  Per-request
/// failures are reported to the client and logged, never returned here.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let store = Arc::new(SettingsStore::new(config.settings_path));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;
    let local_addr = listener
        .local_addr()
        .context("failed to read listener address")?;

    info!("settings broker listening on http://{local_addr}");
    info!("writing settings to {}", store.path().display());

    axum::serve(listener, build_router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP serve loop failed")?;

    Ok(())
}

/// Builds the gateway router over a shared store.
///
/// Public so integration tests can serve the exact production routing on an
/// ephemeral listener.
pub fn build_router(store: Arc<SettingsStore>) -> Router {
    // The per-route fallbacks make a wrong-method request (e.g. POST /load)
    // answer with the same JSON not-found envelope as an unknown path,
    // instead of axum's default empty 405.
    Router::new()
        .route(
            "/load",
            get(handle_load)
                .options(handle_preflight)
                .fallback(handle_unmatched),
        )
        .route(
            "/save",
            post(handle_save)
                .options(handle_preflight)
                .fallback(handle_unmatched),
        )
        .fallback(handle_unmatched)
        .layer(middleware::from_fn(allow_any_origin))
        .with_state(store)
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /load` — the stored document, or `{}` before the first save.
async fn handle_load(State(store): State<Arc<SettingsStore>>) -> Response {
    match settings_service::load_settings(&store) {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            error!("load failed: {e}");
            server_error(e.to_string())
        }
    }
}

/// `POST /save` — sanitize the body and persist it wholesale.
async fn handle_save(State(store): State<Arc<SettingsStore>>, body: Bytes) -> Response {
    let payload = match decode_payload(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("rejecting save request with undecodable body: {e}");
            return server_error(format!("request body is not valid JSON: {e}"));
        }
    };

    match settings_service::save_settings(&store, &payload) {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            error!("save failed: {e}");
            server_error(e.to_string())
        }
    }
}

/// `OPTIONS` on any path — CORS preflight, always succeeds.
async fn handle_preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, GET, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}

/// Any route the router does not know.  Preflight probes still get their 204;
/// everything else gets the JSON not-found envelope.
async fn handle_unmatched(method: Method) -> Response {
    if method == Method::OPTIONS {
        return handle_preflight().await;
    }
    (
        StatusCode::NOT_FOUND,
        Json(GatewayReply::failed("Not found")),
    )
        .into_response()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Decodes a request body into a loosely-typed JSON value.
///
/// An empty body decodes to an empty object: the editor may POST a bare
/// request to reset the document to defaults.
fn decode_payload(body: &[u8]) -> Result<Value, serde_json::Error> {
    if body.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body)
}

/// Assembles the 500 failure response used by both endpoints.
fn server_error(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(GatewayReply::failed(message)),
    )
        .into_response()
}

/// Middleware: every response, success or failure, permits any caller origin.
async fn allow_any_origin(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// Resolves when the process receives Ctrl+C (SIGINT on Unix).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C — shutting down"),
        Err(e) => error!("failed to listen for Ctrl+C signal: {e}"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
