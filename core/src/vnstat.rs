use std::time::Duration;

use async_trait::async_trait;

use netreport_common::config::ReportConfig;
use netreport_common::system::TrafficSource;

use crate::command;

const VNSTAT: &str = "vnstat";

/// Daily counters from the `vnstat` database.
pub struct Vnstat {
    timeout: Duration,
}

impl Vnstat {
    pub fn new(cfg: &ReportConfig) -> Self {
        Self {
            timeout: cfg.command_timeout,
        }
    }
}

#[async_trait]
impl TrafficSource for Vnstat {
    async fn daily_json(&self, interface: &str, days: u32) -> anyhow::Result<String> {
        let limit: String = days.to_string();
        let args: [&str; 6] = ["--json", "d", "-i", interface, "--limit", limit.as_str()];
        Ok(command::run(VNSTAT, &args, self.timeout).await?)
    }

    async fn daily_table(&self, interface: &str, days: u32) -> anyhow::Result<String> {
        let limit: String = days.to_string();
        let args: [&str; 5] = ["-d", "-i", interface, "--limit", limit.as_str()];
        Ok(command::run(VNSTAT, &args, self.timeout).await?)
    }
}
