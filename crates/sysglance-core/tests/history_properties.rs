//! Behavioral guarantees of the history parser and emitters.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;
use sysglance_core::history::{parse_history, to_envelope, to_jsonl_bytes};

#[test]
fn empty_and_whitespace_input_yield_empty() {
    assert!(parse_history("", 10).is_empty());
    assert!(parse_history("   \n\n", 10).is_empty());
    assert!(parse_history("\t \r\n ", 1).is_empty());
}

#[test]
fn blank_lines_do_not_break_line_format() {
    let text = "{\"a\":1}\n\n\n{\"b\":2}\n\n{\"c\":3}\n";
    let items = parse_history(text, 50);
    assert_eq!(items.len(), 3);
    assert_eq!(items[2]["c"], json!(3));
}

#[test]
fn truncation_takes_exactly_the_newest_records() {
    let mut text = String::new();
    for i in 0..10 {
        text.push_str(&format!("{{\"seq\":{i}}}\n"));
    }
    let items = parse_history(&text, 3);
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["seq"], json!(7));
    assert_eq!(items[1]["seq"], json!(8));
    assert_eq!(items[2]["seq"], json!(9));
}

#[test]
fn clean_tail_behind_old_garbage_still_uses_line_format() {
    // The probe only inspects a trailing window; garbage that scrolled out
    // of the window must not flip the format, and the full-file re-scan
    // must still skip it.
    let mut text = String::from("not json at all\n");
    for i in 0..30 {
        text.push_str(&format!("{{\"seq\":{i}}}\n"));
    }
    let items = parse_history(&text, 5);
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["seq"], json!(25));
    assert_eq!(items[4]["seq"], json!(29));
}

#[test]
fn torn_suffix_does_not_change_earlier_records() {
    let clean = "{\"a\":1}\n{\"b\":2}\n";
    let torn = "{\"a\":1}\n{\"b\":2}\n{\"c\":3,\"d\":";
    assert_eq!(parse_history(clean, 2), parse_history(torn, 2));
}

#[test]
fn stray_brace_in_corrupted_fragment_is_stepped_over() {
    let text = "xx{\"bad\": nope}{\"ok\":1}";
    let items = parse_history(text, 50);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["ok"], json!(1));
}

#[test]
fn brace_inside_string_literal_is_not_a_boundary() {
    let text = "{\"msg\":\"open { brace\",\"ts\":1}{\"ts\":2}";
    let items = parse_history(text, 50);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["msg"], json!("open { brace"));
    assert_eq!(items[1]["ts"], json!(2));
}

#[test]
fn binary_noise_never_panics() {
    let items = parse_history("\u{0}\u{1}\u{2}{{{[[[", 5);
    assert!(items.is_empty());
}

#[test]
fn emitted_jsonl_reparses_to_the_same_records() {
    let text = "{\"a\":1}{\"b\":2}\n{\"c\":3}";
    let first = parse_history(text, 50);
    assert_eq!(first.len(), 3);

    let bytes = to_jsonl_bytes(&first);
    let round = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(parse_history(&round, 50), first);
}

#[test]
fn envelope_counts_and_orders_items() {
    let items = parse_history("{\"a\":1}\n{\"b\":2}\n", 50);
    let env = to_envelope(&items);
    assert_eq!(env["count"], json!(2));
    assert_eq!(env["items"][0]["a"], json!(1));
    assert_eq!(env["items"][1]["b"], json!(2));
}

#[test]
fn jsonl_trailing_newline_only_when_nonempty() {
    let items = parse_history("{\"a\":1}\n", 50);
    let bytes = to_jsonl_bytes(&items);
    assert_eq!(&bytes[..], b"{\"a\":1}\n");

    let empty = to_jsonl_bytes(&[]);
    assert!(empty.is_empty());
}
