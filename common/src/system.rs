//! # Capability traits
//!
//! Contracts for everything the report pipeline needs from the outside world.
//! Implementations live in `netreport-core` (real OS tools, SMTP) and in the
//! integration tests (canned data).
//!
//! All methods return `anyhow::Result`; the pipeline decides per capability whether
//! an error aborts the run, degrades to a placeholder or is carried into the report.

use std::path::Path;

use async_trait::async_trait;

use crate::host::IpFamily;
use crate::network::interface::Link;
use crate::report::ReportMessage;

/// Host identity and addressing.
#[async_trait]
pub trait NetworkInfoSource: Send + Sync {
    /// Every link known to the OS, in the order the OS lists them.
    async fn links(&self) -> anyhow::Result<Vec<Link>>;

    async fn hostname(&self) -> anyhow::Result<String>;

    /// The public address of one family as seen by an echo service.
    ///
    /// `Ok(None)` means the service answered nothing usable for that family.
    /// `Err` means the lookup could not be performed at all.
    async fn public_address(&self, family: IpFamily) -> anyhow::Result<Option<String>>;
}

/// Per-interface traffic accounting.
#[async_trait]
pub trait TrafficSource: Send + Sync {
    /// Daily counters as a JSON document.
    async fn daily_json(&self, interface: &str, days: u32) -> anyhow::Result<String>;

    /// The same counters as the tool's own human readable table.
    async fn daily_table(&self, interface: &str, days: u32) -> anyhow::Result<String>;
}

#[async_trait]
pub trait DiskSource: Send + Sync {
    /// Free space on the filesystem holding `path`, formatted by the underlying tool.
    async fn free_space(&self, path: &Path) -> anyhow::Result<String>;
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: &ReportMessage) -> anyhow::Result<()>;
}
