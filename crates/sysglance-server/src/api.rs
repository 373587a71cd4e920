//! JSON API handlers.
//!
//! Every API response carries no-cache headers (the dashboard polls these
//! endpoints) and a permissive CORS origin so the UI can be served from a
//! dev server on another port.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use sysglance_core::history::{self, parse_history, Record};

use crate::app_state::AppState;
use crate::config::HistorySection;
use crate::store::{self, LatestRead};

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub n: Option<String>,
}

/// Resolve the requested record count. Anything that does not parse as an
/// integer falls back to the configured default; the result is clamped to
/// `[1, history.max_items]`.
pub fn clamp_items(requested: Option<&str>, history: &HistorySection) -> usize {
    let n = requested
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(history.default_items as i64);
    n.clamp(1, history.max_items as i64) as usize
}

fn api_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, max-age=0"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers
}

fn json_response(status: StatusCode, body: serde_json::Value) -> Response {
    let mut headers = api_headers();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    (status, headers, body.to_string()).into_response()
}

/// `GET /api/latest` (and `/metrics.json` for collector compatibility):
/// the snapshot file's bytes, passed through verbatim.
pub async fn latest(State(state): State<AppState>) -> Response {
    let attempts = state.cfg().latest.read_attempts;
    match store::read_latest(state.latest_path(), attempts).await {
        LatestRead::Ready(data) => {
            let mut headers = api_headers();
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            (StatusCode::OK, headers, data).into_response()
        }
        LatestRead::Missing => json_response(
            StatusCode::NOT_FOUND,
            json!({
                "error": "metrics.json not found (or not ready). Is the collector running?",
                "expected_path": state.latest_path().display().to_string(),
            }),
        ),
    }
}

async fn load_history(state: &AppState, max_items: usize) -> Vec<Record> {
    let Some(text) = store::read_history_text(state.history_path()).await else {
        return Vec::new();
    };
    parse_history(&text, max_items)
}

/// `GET /api/history?n=` — `{"count": K, "items": [...]}`, oldest to newest.
pub async fn history_json(
    State(state): State<AppState>,
    Query(q): Query<HistoryQuery>,
) -> Response {
    let n = clamp_items(q.n.as_deref(), &state.cfg().history);
    let items = load_history(&state, n).await;
    json_response(StatusCode::OK, history::to_envelope(&items))
}

/// `GET /api/history.jsonl?n=` — same records as a JSONL download.
pub async fn history_jsonl(
    State(state): State<AppState>,
    Query(q): Query<HistoryQuery>,
) -> Response {
    let n = clamp_items(q.n.as_deref(), &state.cfg().history);
    let items = load_history(&state, n).await;
    let body = history::to_jsonl_bytes(&items);

    let mut headers = api_headers();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/x-ndjson"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"metrics.jsonl\""),
    );
    (StatusCode::OK, headers, body).into_response()
}

/// `GET /api/health` — liveness plus which collector files exist.
pub async fn health(State(state): State<AppState>) -> Response {
    let latest_exists = tokio::fs::try_exists(state.latest_path()).await.unwrap_or(false);
    let history_exists = tokio::fs::try_exists(state.history_path()).await.unwrap_or(false);
    json_response(
        StatusCode::OK,
        json!({
            "ok": true,
            "latest_exists": latest_exists,
            "history_exists": history_exists,
            "latest_path": state.latest_path().display().to_string(),
            "history_path": state.history_path().display().to_string(),
        }),
    )
}

/// CORS preflight for the API routes.
pub async fn preflight() -> Response {
    let mut headers = api_headers();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    (StatusCode::NO_CONTENT, headers).into_response()
}
