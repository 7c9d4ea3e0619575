//! Daily traffic counters and the parser for the accounting tool's JSON output.
//!
//! The document shape is the one `vnstat --json d` emits:
//! `{"interfaces": [{"name": .., "traffic": {"day": [{"date": {..}, "rx": .., "tx": ..}]}}]}`.
//! Unknown fields are ignored.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("malformed traffic document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid date {year}-{month:02}-{day:02} in traffic record")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficDay {
    pub date: NaiveDate,
    pub rx: u64,
    pub tx: u64,
    pub total: u64,
}

impl TrafficDay {
    pub fn new(date: NaiveDate, rx: u64, tx: u64) -> Self {
        Self {
            date,
            rx,
            tx,
            total: rx.saturating_add(tx),
        }
    }
}

/// Everything the report needs about traffic on one interface.
///
/// When `error` is set the numeric fields are zeroed and must not be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficReport {
    pub today_total: u64,
    /// Most recent first.
    pub days: Vec<TrafficDay>,
    /// The accounting tool's own table, verbatim.
    pub raw: String,
    pub error: Option<String>,
}

impl TrafficReport {
    pub fn collected(daily: DailyTraffic, raw: String) -> Self {
        Self {
            today_total: daily.today_total,
            days: daily.days,
            raw,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Parsed day records of a single interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTraffic {
    /// Most recent first.
    pub days: Vec<TrafficDay>,
    /// Total of the record dated `today`, zero when there is none.
    pub today_total: u64,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    interfaces: Vec<InterfaceRecord>,
}

#[derive(Debug, Deserialize)]
struct InterfaceRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    traffic: TrafficRecords,
}

#[derive(Debug, Default, Deserialize)]
struct TrafficRecords {
    #[serde(default)]
    day: Vec<DayRecord>,
}

#[derive(Debug, Deserialize)]
struct DayRecord {
    date: DateRecord,
    #[serde(default)]
    rx: u64,
    #[serde(default)]
    tx: u64,
}

#[derive(Debug, Deserialize)]
struct DateRecord {
    year: i32,
    month: u32,
    day: u32,
}

impl DateRecord {
    fn to_date(&self) -> Result<NaiveDate, TrafficError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(TrafficError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }
}

/// Extracts the day records of `interface` from a JSON document.
///
/// Entries for other interfaces are ignored wherever they appear in the list.
pub fn parse_daily(json: &str, interface: &str, today: NaiveDate) -> Result<DailyTraffic, TrafficError> {
    let document: Document = serde_json::from_str(json)?;

    let mut days: Vec<TrafficDay> = Vec::new();
    let mut today_total: u64 = 0;

    for record in document.interfaces.iter().filter(|i| i.name == interface) {
        for day in &record.traffic.day {
            let traffic_day = TrafficDay::new(day.date.to_date()?, day.rx, day.tx);
            if traffic_day.date == today {
                today_total = traffic_day.total;
            }
            days.push(traffic_day);
        }
    }

    days.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(DailyTraffic { days, today_total })
}
