//! Plain-text rendering of the report.

use netreport_common::host::HostFacts;
use netreport_common::network::traffic::{TrafficDay, TrafficReport};
use netreport_common::report::ReportMessage;
use netreport_common::utils::bytes::format_bytes;

const DATE_WIDTH: usize = 10;
const BYTES_WIDTH: usize = 10;

/// Renders the daily counters as a fixed-width table, most recent day first.
///
/// An empty slice produces just the header and the separator line.
pub fn render_table(days: &[TrafficDay]) -> String {
    let header: String = format!(
        "{:<DATE_WIDTH$}  {:>BYTES_WIDTH$}  {:>BYTES_WIDTH$}  {:>BYTES_WIDTH$}",
        "Date", "Received", "Sent", "Total"
    );
    let mut table: String = format!("{}\n{}\n", header, "-".repeat(header.len()));

    let mut sorted: Vec<&TrafficDay> = days.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    for day in sorted {
        table.push_str(&format!(
            "{}  {:>BYTES_WIDTH$}  {:>BYTES_WIDTH$}  {:>BYTES_WIDTH$}\n",
            day.date.format("%Y-%m-%d"),
            format_bytes(day.rx),
            format_bytes(day.tx),
            format_bytes(day.total),
        ));
    }

    table
}

/// Builds subject and body. A traffic error switches to the error template, which
/// carries no numbers.
pub fn compose(facts: &HostFacts, interface: &str, traffic: &TrafficReport, day_limit: u32) -> ReportMessage {
    let HostFacts {
        hostname,
        public_ip,
        disk_free,
    } = facts;

    if let Some(error) = &traffic.error {
        let subject = format!("{hostname} ({public_ip}) traffic report error");
        let body = format!(
            "\nHostname: {hostname}\n\
             Public IP: {public_ip}\n\
             Interface: {interface}\n\
             \n\
             Error:\n\
             {error}\n\
             \n\
             Free disk space: {disk_free}\n"
        );
        return ReportMessage { subject, body };
    }

    let today_total: String = format_bytes(traffic.today_total);
    let table: String = render_table(&traffic.days);
    let raw: &str = &traffic.raw;

    let subject = format!("{hostname} ({public_ip}) {interface} traffic today: {today_total}");
    let body = format!(
        "\nHostname: {hostname}\n\
         Public IP: {public_ip}\n\
         Interface: {interface}\n\
         Traffic today: {today_total}\n\
         \n\
         Traffic over the last {day_limit} days:\n\
         {table}\n\
         Raw vnstat output:\n\
         {raw}\n\
         \n\
         Free disk space: {disk_free}\n"
    );
    ReportMessage { subject, body }
}
