use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RELAY_HOST: &str = "localhost";
pub const DEFAULT_RELAY_PORT: u16 = 1025;
pub const DEFAULT_SENDER: &str = "root@localhost";
pub const DEFAULT_RECIPIENT: &str = "root@localhost";
pub const DEFAULT_DAY_LIMIT: u32 = 7;
pub const DEFAULT_DISK_PATH: &str = "/";
pub const DEFAULT_IP_ECHO_URL: &str = "ifconfig.me";
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// SMTP relay the report is handed to. No TLS, no authentication.
    pub relay_host: String,
    pub relay_port: u16,
    /// Envelope and header `From`.
    pub sender: String,
    /// Envelope and header `To`.
    pub recipient: String,
    /// Number of daily records requested from the traffic accounting tool.
    pub day_limit: u32,
    /// Filesystem whose free space ends up in the report.
    pub disk_path: PathBuf,
    /// Address echo service queried once per IP family.
    pub ip_echo_url: String,
    /// Upper bound for every external command and for the SMTP dialogue.
    ///
    /// A command still running when this expires is killed.
    pub command_timeout: Duration,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            relay_host: DEFAULT_RELAY_HOST.to_string(),
            relay_port: DEFAULT_RELAY_PORT,
            sender: DEFAULT_SENDER.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            day_limit: DEFAULT_DAY_LIMIT,
            disk_path: PathBuf::from(DEFAULT_DISK_PATH),
            ip_echo_url: DEFAULT_IP_ECHO_URL.to_string(),
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }
}
