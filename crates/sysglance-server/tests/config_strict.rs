#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sysglance_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:5000"
history:
  default_itemz: 25 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:8088"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen, "127.0.0.1:8088");
    assert_eq!(cfg.history.default_items, 50);
    assert_eq!(cfg.history.max_items, 500);
    assert_eq!(cfg.latest.read_attempts, 3);
}

#[test]
fn rejects_unsupported_version() {
    let bad = "version: 2\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_out_of_range_history_limits() {
    let bad = r#"
version: 1
history:
  default_items: 0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    let bad = r#"
version: 1
history:
  default_items: 100
  max_items: 10
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn derived_paths_follow_out_dir() {
    let cfg = config::load_from_str("version: 1\npaths:\n  out_dir: \"/tmp/collector\"\n")
        .expect("must parse");
    assert_eq!(
        cfg.paths.latest_path().to_string_lossy(),
        "/tmp/collector/metrics.json"
    );
    assert_eq!(
        cfg.paths.history_path().to_string_lossy(),
        "/tmp/collector/metrics.jsonl"
    );
}
