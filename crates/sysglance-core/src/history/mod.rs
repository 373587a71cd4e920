//! History-log parsing and output emission.
//!
//! The collector appends one JSON object per metrics snapshot to the history
//! log. Two physical encodings occur in the wild:
//! - line-delimited: exactly one object per text line (the intended format)
//! - concatenated: objects serialized back to back, possibly spanning lines,
//!   with no reliable delimiter between records
//!
//! The parser is panic-free: malformed fragments and torn trailing records
//! are skipped, never reported as errors, keeping the server resilient to
//! whatever the collector (or a mid-append read) leaves in the file.

pub mod emit;
pub mod parse;

pub use emit::{to_envelope, to_jsonl_bytes};
pub use parse::{parse_history, Record};
