//! Axum router wiring.
//!
//! Mirrors the paths the dashboard UI expects: the JSON API under `/api`,
//! `/metrics.json` as a compatibility alias for the latest snapshot, and
//! static assets (with SPA fallback) for everything else.

use axum::{routing::get, Router};

use crate::{api, app_state::AppState, assets};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(assets::index))
        .route("/index.html", get(assets::index))
        .route("/favicon.ico", get(assets::favicon))
        .route("/api/latest", get(api::latest).options(api::preflight))
        .route("/metrics.json", get(api::latest).options(api::preflight))
        .route("/api/health", get(api::health).options(api::preflight))
        .route("/api/history", get(api::history_json).options(api::preflight))
        .route(
            "/api/history.jsonl",
            get(api::history_jsonl).options(api::preflight),
        )
        .fallback(assets::fallback)
        .with_state(state)
}
