//! Shared error type across sysglance crates.
//!
//! Note that the history parser has no error path at all: malformed log
//! content is recovered or skipped, never surfaced. The variants here cover
//! the fallible edges of the server crate (config loading and validation).

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SysglanceError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SysglanceError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SysglanceError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SysglanceError::BadRequest(_) => ClientCode::BadRequest,
            SysglanceError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SysglanceError::Internal(_) => ClientCode::Internal,
        }
    }
}
