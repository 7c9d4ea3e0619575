use std::path::Path;
use std::time::Duration;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use tracing::debug;

use netreport_common::config::ReportConfig;
use netreport_common::host::IpFamily;
use netreport_common::network::interface::Link;
use netreport_common::system::{DiskSource, NetworkInfoSource};

use crate::command::{self, CommandError};

/// Host facts read from the local machine: pnet for the link list, `curl` for the
/// public addresses and `df` for free space.
pub struct SystemRepo {
    ip_echo_url: String,
    timeout: Duration,
}

impl SystemRepo {
    pub fn new(cfg: &ReportConfig) -> Self {
        Self {
            ip_echo_url: cfg.ip_echo_url.clone(),
            timeout: cfg.command_timeout,
        }
    }
}

#[async_trait]
impl NetworkInfoSource for SystemRepo {
    async fn links(&self) -> anyhow::Result<Vec<Link>> {
        let links: Vec<Link> = pnet::datalink::interfaces()
            .into_iter()
            .map(|intf| Link::new(intf.name.clone(), intf.is_loopback()))
            .collect();
        debug!(count = links.len(), "listed network links");
        Ok(links)
    }

    async fn hostname(&self) -> anyhow::Result<String> {
        sys_info::hostname().map_err(|e| anyhow!("reading hostname: {e}"))
    }

    async fn public_address(&self, family: IpFamily) -> anyhow::Result<Option<String>> {
        let family_flag: &str = match family {
            IpFamily::V4 => "-4",
            IpFamily::V6 => "-6",
        };
        let max_time: String = self.timeout.as_secs().max(1).to_string();
        let args: [&str; 5] = ["-s", family_flag, "--max-time", max_time.as_str(), self.ip_echo_url.as_str()];

        match command::run("curl", &args, self.timeout).await {
            Ok(answer) => Ok(Some(answer.trim().to_string()).filter(|a| !a.is_empty())),
            Err(CommandError::Failed { status, .. }) => {
                debug!(%family, %status, "address echo returned nothing");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl DiskSource for SystemRepo {
    async fn free_space(&self, path: &Path) -> anyhow::Result<String> {
        let path_arg = path.to_string_lossy();
        let output: String = command::run("df", &["-P", "-h", &*path_arg], self.timeout).await?;
        parse_df_available(&output)
            .map(str::to_string)
            .with_context(|| format!("unexpected `df` output for {}", path.display()))
    }
}

/// The `Avail` column of the first filesystem line of `df -P` output.
fn parse_df_available(output: &str) -> Option<&str> {
    output.lines().nth(1)?.split_whitespace().nth(3)
}
