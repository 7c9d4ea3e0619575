use async_trait::async_trait;

use netreport_common::report::ReportMessage;
use netreport_common::system::MailTransport;

use crate::terminal::print;

/// Shows the composed report on the terminal instead of mailing it.
pub struct PreviewMailer;

#[async_trait]
impl MailTransport for PreviewMailer {
    async fn send(&self, message: &ReportMessage) -> anyhow::Result<()> {
        print::header("report preview");
        print::aligned_line("Subject", &message.subject);
        for line in message.body.lines() {
            print::print(line);
        }
        Ok(())
    }
}
