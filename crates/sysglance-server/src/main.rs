//! sysglance server binary.
//!
//! Serves the dashboard UI and the metrics API on top of the collector's
//! output files:
//! - GET /                       -> web/index.html
//! - GET /api/latest             -> latest snapshot JSON
//! - GET /metrics.json           -> same as /api/latest (compat)
//! - GET /api/history?n=50       -> {"count":N,"items":[...]} last N records
//! - GET /api/history.jsonl?n=50 -> last N records as a JSONL download
//! - GET /api/health             -> {"ok":true,...}

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use sysglance_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("sysglance.yaml")
        .expect("config load failed")
        .with_env_overrides();
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    // The collector may not have started yet; make sure both directories
    // exist so early requests get clean empty responses.
    std::fs::create_dir_all(&cfg.paths.out_dir).expect("create out dir failed");
    std::fs::create_dir_all(&cfg.paths.web_dir).expect("create web dir failed");

    let state = app_state::AppState::new(cfg);
    tracing::info!(
        %listen,
        web = %state.web_dir().display(),
        latest = %state.latest_path().display(),
        history = %state.history_path().display(),
        "sysglance starting"
    );

    let app = router::build_router(state);
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
