//! Selection of the interface the report is about.

const LOOPBACK_NAME: &str = "lo";

/// A single entry of the OS link listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub is_loopback: bool,
}

impl Link {
    pub fn new(name: impl Into<String>, is_loopback: bool) -> Self {
        Self {
            name: name.into(),
            is_loopback,
        }
    }

    fn is_reportable(&self) -> bool {
        !self.is_loopback && self.name != LOOPBACK_NAME && !self.name.is_empty()
    }
}

/// Returns the first link in listing order that is not the loopback interface.
pub fn first_non_loopback(links: &[Link]) -> Option<&Link> {
    links.iter().find(|link| link.is_reportable())
}
