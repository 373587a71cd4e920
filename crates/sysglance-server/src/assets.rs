//! Static dashboard assets served from the configured web directory.

use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;
use crate::store;

/// `GET /` and `GET /index.html`.
pub async fn index(State(state): State<AppState>) -> Response {
    match serve_file(&state.web_dir().join("index.html")).await {
        Some(resp) => resp,
        None => (StatusCode::NOT_FOUND, "index.html not found").into_response(),
    }
}

/// Browsers ask for this unconditionally; an empty 204 keeps the log quiet.
pub async fn favicon() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Fallback route: any file under the web dir, else the SPA index, else 404.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    if let Some(rel) = sanitize(uri.path()) {
        if let Some(resp) = serve_file(&state.web_dir().join(rel)).await {
            return resp;
        }
    }
    if let Some(resp) = serve_file(&state.web_dir().join("index.html")).await {
        return resp;
    }
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Reject any path component that could escape the web dir.
fn sanitize(path: &str) -> Option<PathBuf> {
    let rel = path.trim_start_matches('/');
    if rel.is_empty() {
        return None;
    }
    let rel = Path::new(rel);
    if rel
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Some(rel.to_path_buf())
    } else {
        None
    }
}

async fn serve_file(path: &Path) -> Option<Response> {
    let data = store::read_file_bytes(path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let content_type = HeaderValue::from_str(mime.as_ref()).ok()?;
    Some(([(header::CONTENT_TYPE, content_type)], data).into_response())
}
