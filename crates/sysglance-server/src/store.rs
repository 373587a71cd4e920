//! File collaborators for the collector's output.
//!
//! The collector process owns these files; the server only ever reads them.
//! Reads are not locked against the writer, so any read may observe a torn
//! trailing record: the latest reader retries, and the history parser in
//! `sysglance-core` absorbs whatever is left.

use std::path::Path;

use bytes::Bytes;
use tokio::fs;

/// Result of reading the latest-snapshot file. Absent and empty files both
/// mean the collector has not produced a usable snapshot yet.
#[derive(Debug)]
pub enum LatestRead {
    Missing,
    /// Snapshot bytes, passed through to the client verbatim.
    Ready(Bytes),
}

/// Read a whole file; absent or unreadable yields `None`.
pub async fn read_file_bytes(path: &Path) -> Option<Bytes> {
    match fs::read(path).await {
        Ok(data) => Some(Bytes::from(data)),
        Err(_) => None,
    }
}

/// Read the latest snapshot, re-reading up to `attempts` times while the
/// content looks mid-write. The sanity probe is deliberately cheap: a
/// complete snapshot contains at least one `{` and one `}`.
pub async fn read_latest(path: &Path, attempts: usize) -> LatestRead {
    for _ in 0..attempts.max(1) {
        let Some(data) = read_file_bytes(path).await else {
            return LatestRead::Missing;
        };
        if data.is_empty() {
            return LatestRead::Missing;
        }
        if data.contains(&b'{') && data.contains(&b'}') {
            return LatestRead::Ready(data);
        }
        tracing::debug!(path = %path.display(), "latest snapshot looks torn, retrying");
    }
    LatestRead::Missing
}

/// Read the history log as text. Absent file is a distinct condition from an
/// empty one (`None` vs `Some("")`); invalid UTF-8 from torn multi-byte
/// writes is replaced rather than rejected.
pub async fn read_history_text(path: &Path) -> Option<String> {
    let data = read_file_bytes(path).await?;
    Some(String::from_utf8_lossy(&data).into_owned())
}
