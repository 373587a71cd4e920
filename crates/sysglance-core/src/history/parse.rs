//! Resilient history-log parser (panic-free).
//!
//! Format detection is a heuristic dispatch, not a grammar: a cheap probe
//! over a bounded trailing window decides whether the file is clean
//! line-delimited JSON; anything else falls back to a permissive scan that
//! extracts complete JSON values wherever one opens. Both paths return the
//! last `max_items` objects in file order (oldest to newest).

use serde_json::{Map, Value};

/// One metrics snapshot. Opaque to the parser; only object boundaries matter.
pub type Record = Map<String, Value>;

/// Trailing-window multiplier for the line-format probe. Bounds the cost of
/// format detection without reading the whole file twice in the common case.
const PROBE_WINDOW_FACTOR: usize = 5;

/// Recover the last `max_items` JSON objects from raw history-log text.
///
/// Never fails: empty input, blank lines, torn trailing records, and binary
/// noise all yield a (possibly empty) result. `max_items` is trusted as
/// given; clamping a user-supplied count is the caller's job.
pub fn parse_history(raw: &str, max_items: usize) -> Vec<Record> {
    let text = raw.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|ln| !ln.is_empty())
        .collect();

    if let Some(items) = try_line_delimited(&lines, max_items) {
        return items;
    }

    let items = scan_concatenated(text, max_items);
    tracing::debug!(
        recovered = items.len(),
        "history log is not clean line-delimited JSON, used concatenated scan"
    );
    items
}

/// Fast path: accept the file as line-delimited only if every line in the
/// trailing probe window is a single complete JSON object.
fn try_line_delimited(lines: &[&str], max_items: usize) -> Option<Vec<Record>> {
    let window = lines
        .len()
        .min(max_items.saturating_mul(PROBE_WINDOW_FACTOR));
    let probe = &lines[lines.len() - window..];
    if probe.is_empty() {
        return None;
    }

    for ln in probe {
        if !(ln.starts_with('{') && ln.ends_with('}')) {
            return None;
        }
        match serde_json::from_str::<Value>(ln) {
            Ok(Value::Object(_)) => {}
            _ => return None,
        }
    }

    // The probe window is a detection heuristic only. Once the format is
    // confirmed, truncation must count from the true end of the file, so
    // every line is scanned and unparseable ones are skipped.
    let mut items: Vec<Record> = Vec::new();
    for ln in lines {
        if !(ln.starts_with('{') && ln.ends_with('}')) {
            continue;
        }
        if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(ln) {
            items.push(obj);
        }
    }
    keep_tail(&mut items, max_items);
    Some(items)
}

/// Permissive fallback: at each `{`, attempt a prefix decode of one complete
/// JSON value and resume at its end offset. A failed decode advances the
/// cursor by one character, which steps over stray braces inside corrupted
/// fragments and drops torn trailing records.
fn scan_concatenated(text: &str, max_items: usize) -> Vec<Record> {
    let mut items: Vec<Record> = Vec::new();
    let mut idx = 0;

    while idx < text.len() {
        let Some(rel) = text[idx..].find('{') else {
            break;
        };
        let start = idx + rel;

        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => {
                idx = start + stream.byte_offset();
                // Non-object values advance the scan but are not records.
                if let Value::Object(obj) = value {
                    items.push(obj);
                }
            }
            // `{` is a single byte, so start + 1 is a char boundary.
            _ => idx = start + 1,
        }
    }

    keep_tail(&mut items, max_items);
    items
}

fn keep_tail(items: &mut Vec<Record>, max_items: usize) {
    if items.len() > max_items {
        items.drain(..items.len() - max_items);
    }
}
