//! Turns capability answers into report facts.
//!
//! Every function here absorbs the errors of its capability: interface discovery
//! collapses to `None`, the public address lookup and the host facts degrade to
//! placeholders, and traffic collection records the failure in the report.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use netreport_common::host::{HostFacts, IpFamily, PublicIp, UNKNOWN};
use netreport_common::network::interface;
use netreport_common::network::traffic::{self, TrafficReport};
use netreport_common::system::{DiskSource, NetworkInfoSource, TrafficSource};

/// Name of the first non-loopback link, or `None` when there is none or the link
/// list could not be read.
pub async fn discover_interface(source: &dyn NetworkInfoSource) -> Option<String> {
    match source.links().await {
        Ok(links) => interface::first_non_loopback(&links).map(|link| link.name.clone()),
        Err(e) => {
            warn!("Could not list network links: {e:#}");
            None
        }
    }
}

pub async fn lookup_public_ip(source: &dyn NetworkInfoSource) -> PublicIp {
    let lookup = async {
        let ipv4 = source.public_address(IpFamily::V4).await?;
        let ipv6 = source.public_address(IpFamily::V6).await?;
        anyhow::Ok((ipv4, ipv6))
    };

    match lookup.await {
        Ok((ipv4, ipv6)) => PublicIp::resolved(ipv4, ipv6),
        Err(e) => {
            warn!("Public address lookup failed: {e:#}");
            PublicIp::Unavailable(format!("{e:#}"))
        }
    }
}

/// Collects the last `days` daily counters of `interface`.
///
/// Never fails: on error the returned report carries the description and no numbers.
pub async fn collect_traffic(
    source: &dyn TrafficSource,
    interface: &str,
    days: u32,
    today: NaiveDate,
) -> TrafficReport {
    match try_collect_traffic(source, interface, days, today).await {
        Ok(report) => {
            debug!(interface, records = report.days.len(), today_total = report.today_total, "traffic collected");
            report
        }
        Err(e) => {
            warn!("Traffic collection for {interface} failed: {e:#}");
            TrafficReport::failed(format!("failed to collect traffic statistics: {e:#}"))
        }
    }
}

async fn try_collect_traffic(
    source: &dyn TrafficSource,
    interface: &str,
    days: u32,
    today: NaiveDate,
) -> anyhow::Result<TrafficReport> {
    let json: String = source.daily_json(interface, days).await?;
    let daily = traffic::parse_daily(&json, interface, today)?;
    let raw: String = source.daily_table(interface, days).await?;
    Ok(TrafficReport::collected(daily, raw))
}

pub async fn host_facts(network: &dyn NetworkInfoSource, disk: &dyn DiskSource, disk_path: &Path) -> HostFacts {
    let hostname: String = network.hostname().await.unwrap_or_else(|e| {
        warn!("Could not read hostname: {e:#}");
        UNKNOWN.to_string()
    });

    let public_ip: PublicIp = lookup_public_ip(network).await;

    let disk_free: String = disk.free_space(disk_path).await.unwrap_or_else(|e| {
        warn!("Could not read free space of {}: {e:#}", disk_path.display());
        UNKNOWN.to_string()
    });

    HostFacts {
        hostname,
        public_ip,
        disk_free,
    }
}
