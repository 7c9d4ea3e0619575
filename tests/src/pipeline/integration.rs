#![cfg(test)]
use chrono::{Days, Local, NaiveDate};
use netreport_common::config::ReportConfig;
use netreport_common::network::interface::Link;
use netreport_core::pipeline::{self, Capabilities, RunOutcome};

use crate::utils::{FakeDisk, FakeNetwork, FakeTraffic, RecordingMailer, eth0_host, vnstat_json};

const VNSTAT_TABLE: &str = " eth0  /  daily\n\n          day        rx      |     tx      |    total";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A full run with every collector answering and today's total at 3 KiB.
#[tokio::test]
async fn report_with_todays_traffic() {
    let today = today();
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();
    let network = eth0_host();
    let traffic = FakeTraffic {
        json: Some(vnstat_json("eth0", &[(yesterday, 10, 20), (today, 1024, 2048)])),
        table: VNSTAT_TABLE,
    };
    let mailer = RecordingMailer::default();
    let caps = Capabilities {
        network: &network,
        traffic: &traffic,
        disk: &FakeDisk("42G"),
        mail: &mailer,
    };

    let outcome = pipeline::run(&caps, &ReportConfig::default(), today).await;

    assert!(matches!(outcome, RunOutcome::Delivered { ref interface, .. } if interface == "eth0"));
    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);

    let message = &sent[0];
    assert!(message.subject.contains("3.00 KiB"), "subject: {}", message.subject);
    assert!(message.subject.starts_with("edge-01 (IPv4: 203.0.113.9 IPv6: no public IPv6) eth0"));
    assert!(message.body.contains("Traffic over the last 7 days:"));
    assert!(message.body.contains(&today.format("%Y-%m-%d").to_string()));
    assert!(message.body.contains(VNSTAT_TABLE));
    assert!(message.body.contains("Free disk space: 42G"));

    let today_row = message.body.find(&today.format("%Y-%m-%d").to_string()).unwrap();
    let yesterday_row = message.body.find(&yesterday.format("%Y-%m-%d").to_string()).unwrap();
    assert!(today_row < yesterday_row, "most recent day must come first");
}

#[tokio::test]
async fn traffic_failure_uses_error_template() {
    let network = eth0_host();
    let traffic = FakeTraffic {
        json: None,
        table: VNSTAT_TABLE,
    };
    let mailer = RecordingMailer::default();
    let caps = Capabilities {
        network: &network,
        traffic: &traffic,
        disk: &FakeDisk("42G"),
        mail: &mailer,
    };

    pipeline::run(&caps, &ReportConfig::default(), today()).await;

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    let message = &sent[0];
    assert!(message.subject.ends_with("traffic report error"));
    assert!(message.body.contains("failed to collect traffic statistics: vnstat: interface \"eth0\""));
    assert!(!message.body.contains(VNSTAT_TABLE));
    assert!(message.body.contains("Free disk space: 42G"));
}

#[tokio::test]
async fn no_traffic_today_reports_zero() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let network = eth0_host();
    let traffic = FakeTraffic {
        json: Some(vnstat_json("eth0", &[(day, 5, 5)])),
        table: VNSTAT_TABLE,
    };
    let mailer = RecordingMailer::default();
    let caps = Capabilities {
        network: &network,
        traffic: &traffic,
        disk: &FakeDisk("42G"),
        mail: &mailer,
    };

    pipeline::run(&caps, &ReportConfig::default(), today()).await;

    let message = &mailer.sent()[0];
    assert!(message.subject.ends_with("traffic today: 0.00 B"));
    assert!(message.body.contains("2024-01-01"));
}

#[tokio::test]
async fn loopback_only_host_sends_nothing() {
    let network = FakeNetwork {
        links: vec![Link::new("lo", true)],
        ..eth0_host()
    };
    let traffic = FakeTraffic {
        json: None,
        table: "",
    };
    let mailer = RecordingMailer::default();
    let caps = Capabilities {
        network: &network,
        traffic: &traffic,
        disk: &FakeDisk("42G"),
        mail: &mailer,
    };

    let outcome = pipeline::run(&caps, &ReportConfig::default(), today()).await;

    assert!(matches!(outcome, RunOutcome::NoInterface));
    assert!(outcome.message().is_none());
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn delivery_failure_is_reported_not_raised() {
    let today = today();
    let network = eth0_host();
    let traffic = FakeTraffic {
        json: Some(vnstat_json("eth0", &[(today, 1, 1)])),
        table: VNSTAT_TABLE,
    };
    let mailer = RecordingMailer::failing();
    let caps = Capabilities {
        network: &network,
        traffic: &traffic,
        disk: &FakeDisk("42G"),
        mail: &mailer,
    };

    let outcome = pipeline::run(&caps, &ReportConfig::default(), today).await;

    match outcome {
        RunOutcome::DeliveryFailed { interface, message, error } => {
            assert_eq!(interface, "eth0");
            assert_eq!(error, "connection refused");
            assert!(message.subject.contains("2.00 B"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn day_limit_shows_in_body() {
    let today = today();
    let network = eth0_host();
    let traffic = FakeTraffic {
        json: Some(vnstat_json("eth0", &[(today, 1, 1)])),
        table: VNSTAT_TABLE,
    };
    let mailer = RecordingMailer::default();
    let caps = Capabilities {
        network: &network,
        traffic: &traffic,
        disk: &FakeDisk("42G"),
        mail: &mailer,
    };
    let cfg = ReportConfig {
        day_limit: 3,
        ..ReportConfig::default()
    };

    pipeline::run(&caps, &cfg, today).await;

    assert!(mailer.sent()[0].body.contains("Traffic over the last 3 days:"));
}
