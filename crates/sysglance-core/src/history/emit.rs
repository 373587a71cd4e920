//! Emitters shaping parsed records for the HTTP layer.

use bytes::Bytes;
use serde_json::{json, Value};

use super::parse::Record;

/// JSON envelope `{"count": K, "items": [...]}`, items oldest to newest.
pub fn to_envelope(items: &[Record]) -> Value {
    json!({
        "count": items.len(),
        "items": items,
    })
}

/// Newline-delimited output: one compact JSON object per line. The trailing
/// newline is present exactly when there is at least one record.
pub fn to_jsonl_bytes(items: &[Record]) -> Bytes {
    let mut out = String::new();
    for item in items {
        // Serializing a string-keyed map to a string cannot fail in
        // practice; a failure here simply drops the record.
        if let Ok(line) = serde_json::to_string(item) {
            out.push_str(&line);
            out.push('\n');
        }
    }
    Bytes::from(out)
}
