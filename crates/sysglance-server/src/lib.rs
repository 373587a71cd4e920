//! sysglance server library entry.
//!
//! This crate wires the config, file store, API handlers, and static asset
//! serving into the dashboard HTTP service. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod assets;
pub mod config;
pub mod router;
pub mod store;
