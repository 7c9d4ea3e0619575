#![cfg(test)]
use std::path::Path;
use std::sync::Mutex;

use anyhow::bail;
use async_trait::async_trait;
use chrono::NaiveDate;

use netreport_common::host::IpFamily;
use netreport_common::network::interface::Link;
use netreport_common::report::ReportMessage;
use netreport_common::system::{DiskSource, MailTransport, NetworkInfoSource, TrafficSource};

pub struct FakeNetwork {
    pub links: Vec<Link>,
    pub hostname: &'static str,
    pub ipv4: Option<&'static str>,
    pub ipv6: Option<&'static str>,
}

#[async_trait]
impl NetworkInfoSource for FakeNetwork {
    async fn links(&self) -> anyhow::Result<Vec<Link>> {
        Ok(self.links.clone())
    }

    async fn hostname(&self) -> anyhow::Result<String> {
        Ok(self.hostname.to_string())
    }

    async fn public_address(&self, family: IpFamily) -> anyhow::Result<Option<String>> {
        let answer = match family {
            IpFamily::V4 => self.ipv4,
            IpFamily::V6 => self.ipv6,
        };
        Ok(answer.map(str::to_string))
    }
}

pub struct FakeTraffic {
    pub json: Option<String>,
    pub table: &'static str,
}

#[async_trait]
impl TrafficSource for FakeTraffic {
    async fn daily_json(&self, interface: &str, _days: u32) -> anyhow::Result<String> {
        match &self.json {
            Some(json) => Ok(json.clone()),
            None => bail!("vnstat: interface \"{interface}\" not found in database"),
        }
    }

    async fn daily_table(&self, _interface: &str, _days: u32) -> anyhow::Result<String> {
        Ok(self.table.to_string())
    }
}

pub struct FakeDisk(pub &'static str);

#[async_trait]
impl DiskSource for FakeDisk {
    async fn free_space(&self, _path: &Path) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

/// Keeps every message it is asked to send, optionally failing afterwards.
#[derive(Default)]
pub struct RecordingMailer {
    pub fail: bool,
    pub sent: Mutex<Vec<ReportMessage>>,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<ReportMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailer {
    async fn send(&self, message: &ReportMessage) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail {
            bail!("connection refused");
        }
        Ok(())
    }
}

pub fn eth0_host() -> FakeNetwork {
    FakeNetwork {
        links: vec![Link::new("lo", true), Link::new("eth0", false), Link::new("wlan0", false)],
        hostname: "edge-01",
        ipv4: Some("203.0.113.9"),
        ipv6: None,
    }
}

/// A `vnstat --json d` document with one day record per `(date, rx, tx)`.
pub fn vnstat_json(interface: &str, days: &[(NaiveDate, u64, u64)]) -> String {
    let records: Vec<String> = days
        .iter()
        .map(|(date, rx, tx)| {
            format!(
                r#"{{"date":{{"year":{},"month":{},"day":{}}},"rx":{rx},"tx":{tx}}}"#,
                date.format("%Y"),
                date.format("%-m"),
                date.format("%-d"),
            )
        })
        .collect();
    format!(
        r#"{{"jsonversion":"2","interfaces":[{{"name":"{interface}","traffic":{{"day":[{}]}}}}]}}"#,
        records.join(",")
    )
}
