//! Top-level facade crate for sysglance.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use sysglance_core::*;
}

pub mod server {
    pub use sysglance_server::*;
}
