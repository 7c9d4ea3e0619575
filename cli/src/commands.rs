pub mod report;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use netreport_common::config::{self, ReportConfig};

#[derive(Parser, Debug)]
#[command(name = "netreport")]
#[command(about = "Mail a daily summary of this host's network traffic.")]
#[command(version)]
pub struct CommandLine {
    /// SMTP relay that receives the report
    #[arg(long, default_value = config::DEFAULT_RELAY_HOST)]
    pub relay_host: String,

    #[arg(long, default_value_t = config::DEFAULT_RELAY_PORT)]
    pub relay_port: u16,

    /// Sender address
    #[arg(long = "from", default_value = config::DEFAULT_SENDER)]
    pub sender: String,

    /// Recipient address
    #[arg(long = "to", default_value = config::DEFAULT_RECIPIENT)]
    pub recipient: String,

    /// Number of days of traffic to include
    #[arg(long, default_value_t = config::DEFAULT_DAY_LIMIT,
          value_parser = clap::value_parser!(u32).range(1..=365))]
    pub days: u32,

    /// Report free space of the filesystem holding this path
    #[arg(long, default_value = config::DEFAULT_DISK_PATH)]
    pub disk_path: PathBuf,

    /// Address echo service used to find the public IPs
    #[arg(long, default_value = config::DEFAULT_IP_ECHO_URL)]
    pub ip_echo_url: String,

    /// Seconds any external command or the relay may take
    #[arg(long, default_value_t = config::DEFAULT_COMMAND_TIMEOUT.as_secs(),
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Print the report instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> ReportConfig {
        ReportConfig {
            relay_host: self.relay_host,
            relay_port: self.relay_port,
            sender: self.sender,
            recipient: self.recipient,
            day_limit: self.days,
            disk_path: self.disk_path,
            ip_echo_url: self.ip_echo_url,
            command_timeout: Duration::from_secs(self.timeout),
        }
    }
}
