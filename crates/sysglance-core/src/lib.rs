//! sysglance core: history-log recovery parsing, output emitters, and error types.
//!
//! This crate holds everything that does not touch the network or the
//! filesystem: the resilient parser that recovers metric records from the
//! collector's append-only log, the emitters that shape parsed records for
//! the HTTP layer, and the error surface shared with the server crate. It
//! carries no runtime dependencies so it can be reused in tooling.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The parser in particular must absorb any byte sequence the log file can
//! contain, including torn writes and binary noise, without crashing the
//! serving process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod history;

/// Shared result type.
pub use error::{Result, SysglanceError};
pub use history::{parse_history, Record};
