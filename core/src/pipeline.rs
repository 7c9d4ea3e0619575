//! The report run: discover, collect, compose, send.

use chrono::NaiveDate;
use tracing::{debug, info};

use netreport_common::config::ReportConfig;
use netreport_common::report::ReportMessage;
use netreport_common::system::{DiskSource, MailTransport, NetworkInfoSource, TrafficSource};

use crate::{collector, report};

/// The outside world as seen by one run.
pub struct Capabilities<'a> {
    pub network: &'a dyn NetworkInfoSource,
    pub traffic: &'a dyn TrafficSource,
    pub disk: &'a dyn DiskSource,
    pub mail: &'a dyn MailTransport,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// No reportable interface. Nothing was collected or sent.
    NoInterface,
    Delivered {
        interface: String,
        message: ReportMessage,
    },
    DeliveryFailed {
        interface: String,
        message: ReportMessage,
        error: String,
    },
}

impl RunOutcome {
    pub fn message(&self) -> Option<&ReportMessage> {
        match self {
            RunOutcome::NoInterface => None,
            RunOutcome::Delivered { message, .. } | RunOutcome::DeliveryFailed { message, .. } => {
                Some(message)
            }
        }
    }
}

/// Runs every stage in order. `today` decides which daily record counts as today's.
///
/// Only a missing interface stops the run early; every other failure is carried
/// into the message or into the returned outcome.
pub async fn run(caps: &Capabilities<'_>, cfg: &ReportConfig, today: NaiveDate) -> RunOutcome {
    let Some(interface) = collector::discover_interface(caps.network).await else {
        return RunOutcome::NoInterface;
    };
    info!("Using network interface {interface}");

    let traffic = collector::collect_traffic(caps.traffic, &interface, cfg.day_limit, today).await;
    let facts = collector::host_facts(caps.network, caps.disk, &cfg.disk_path).await;
    let message: ReportMessage = report::compose(&facts, &interface, &traffic, cfg.day_limit);

    match caps.mail.send(&message).await {
        Ok(()) => {
            debug!(subject = %message.subject, "report delivered");
            RunOutcome::Delivered { interface, message }
        }
        Err(e) => {
            let error: String = format!("{e:#}");
            RunOutcome::DeliveryFailed {
                interface,
                message,
                error,
            }
        }
    }
}
