use std::fmt;

pub const NO_PUBLIC_IPV4: &str = "no public IPv4";
pub const NO_PUBLIC_IPV6: &str = "no public IPv6";
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn placeholder(self) -> &'static str {
        match self {
            IpFamily::V4 => NO_PUBLIC_IPV4,
            IpFamily::V6 => NO_PUBLIC_IPV6,
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFamily::V4 => write!(f, "IPv4"),
            IpFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// Outcome of the public address lookup.
///
/// Each family degrades to its own placeholder, but a lookup that could not run at
/// all collapses both families into a single description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicIp {
    Resolved { ipv4: String, ipv6: String },
    Unavailable(String),
}

impl PublicIp {
    /// Builds the resolved variant, substituting placeholders for blank answers.
    pub fn resolved(ipv4: Option<String>, ipv6: Option<String>) -> Self {
        PublicIp::Resolved {
            ipv4: non_blank(ipv4).unwrap_or_else(|| NO_PUBLIC_IPV4.to_string()),
            ipv6: non_blank(ipv6).unwrap_or_else(|| NO_PUBLIC_IPV6.to_string()),
        }
    }
}

impl fmt::Display for PublicIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicIp::Resolved { ipv4, ipv6 } => write!(f, "IPv4: {ipv4} IPv6: {ipv6}"),
            PublicIp::Unavailable(reason) => {
                write!(f, "could not determine public IP: {reason}")
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Best-effort facts about the reporting host. Every field is printable as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFacts {
    pub hostname: String,
    pub public_ip: PublicIp,
    pub disk_free: String,
}
