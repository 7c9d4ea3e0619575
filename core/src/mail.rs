use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::debug;

use netreport_common::config::ReportConfig;
use netreport_common::report::ReportMessage;
use netreport_common::system::MailTransport;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address `{address}`: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("could not build the report message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("relay {relay} did not accept the report: {source}")]
    Smtp {
        relay: String,
        #[source]
        source: lettre::transport::smtp::Error,
    },
}

/// Delivers reports to a plain SMTP relay, without TLS or authentication.
///
/// Connections are not pooled: each send opens its own connection and it is closed
/// when the send finishes, whether or not the relay accepted the message.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    relay: String,
    sender: Mailbox,
    recipient: Mailbox,
}

impl SmtpMailer {
    pub fn new(cfg: &ReportConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(cfg.relay_host.as_str())
            .port(cfg.relay_port)
            .timeout(Some(cfg.command_timeout))
            .build();

        Ok(Self {
            transport,
            relay: format!("{}:{}", cfg.relay_host, cfg.relay_port),
            sender: parse_mailbox(&cfg.sender)?,
            recipient: parse_mailbox(&cfg.recipient)?,
        })
    }

    fn build_message(&self, report: &ReportMessage) -> Result<Message, MailError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(report.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(report.body.clone())?;
        Ok(message)
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, report: &ReportMessage) -> anyhow::Result<()> {
        let message: Message = self.build_message(report)?;
        debug!(relay = %self.relay, "handing report to relay");

        let response = self.transport.send(message).await.map_err(|source| MailError::Smtp {
            relay: self.relay.clone(),
            source,
        })?;

        debug!(code = %response.code(), "relay accepted report");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}
