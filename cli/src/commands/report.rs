use anyhow::Context;
use chrono::{Local, NaiveDate};
use colored::*;

use netreport_common::config::ReportConfig;
use netreport_common::system::MailTransport;
use netreport_core::mail::SmtpMailer;
use netreport_core::pipeline::{self, Capabilities, RunOutcome};
use netreport_core::system::SystemRepo;
use netreport_core::vnstat::Vnstat;

use crate::terminal::preview::PreviewMailer;
use crate::terminal::print;

/// Runs one report cycle.
///
/// Only configuration errors are returned; a run that found no interface or could
/// not deliver its mail still ends normally after saying so.
pub async fn report(cfg: ReportConfig, dry_run: bool) -> anyhow::Result<()> {
    let mailer: Box<dyn MailTransport> = if dry_run {
        Box::new(PreviewMailer)
    } else {
        Box::new(SmtpMailer::new(&cfg).context("invalid mail settings")?)
    };

    let system = SystemRepo::new(&cfg);
    let vnstat = Vnstat::new(&cfg);
    let caps = Capabilities {
        network: &system,
        traffic: &vnstat,
        disk: &system,
        mail: mailer.as_ref(),
    };

    let today: NaiveDate = Local::now().date_naive();
    let outcome: RunOutcome = pipeline::run(&caps, &cfg, today).await;

    print_outcome(&outcome, &cfg, dry_run);
    print::end_of_program();
    Ok(())
}

fn print_outcome(outcome: &RunOutcome, cfg: &ReportConfig, dry_run: bool) {
    match outcome {
        RunOutcome::NoInterface => {
            tracing::error!("No usable network interface found!");
        }
        RunOutcome::Delivered { .. } if dry_run => {
            tracing::info!("Dry run, nothing was sent");
        }
        RunOutcome::Delivered { .. } => {
            let recipient: ColoredString = cfg.recipient.bold();
            tracing::info!("Report sent to {recipient}");
        }
        RunOutcome::DeliveryFailed { error, .. } => {
            tracing::error!("Failed to send report: {error}");
        }
    }
}
