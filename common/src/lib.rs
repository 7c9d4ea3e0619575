//! Shared models, configuration and capability traits for `netreport`.
//!
//! Nothing in here performs IO. The collectors in `netreport-core` implement the
//! traits in [`system`] against the real operating system, tests implement them
//! with canned data.

pub mod config;
pub mod host;
pub mod network;
pub mod report;
pub mod system;
pub mod utils;
