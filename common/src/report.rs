/// A composed report, ready to hand to a [`crate::system::MailTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMessage {
    pub subject: String,
    pub body: String,
}
