use anyhow::{Context, Result};
use lettre::message::{Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use std::sync::Arc;

use crate::config::CONFIG;
use crate::data_models::JobPosting;
use crate::report;

pub const EMAIL_SUBJECT: &str = "TPRM jobs for today";

/// Delivery seam so tests can substitute a transport that fails on demand.
pub trait ReportTransport: Send + Sync {
    fn deliver(&self, message: &Message) -> Result<()>;
}

/// Production transport: authenticated STARTTLS session against the
/// configured relay.
pub struct SmtpReportTransport {
    transport: SmtpTransport,
}

impl SmtpReportTransport {
    pub fn from_config() -> Result<SmtpReportTransport> {
        let credentials = Credentials::new(
            CONFIG.smtp_sender.clone(),
            CONFIG.smtp_password.clone(),
        );
        let transport = SmtpTransport::starttls_relay(&CONFIG.smtp_relay)
            .context("Failed to configure SMTP relay")?
            .credentials(credentials)
            .build();
        Ok(SmtpReportTransport { transport })
    }
}

impl ReportTransport for SmtpReportTransport {
    fn deliver(&self, message: &Message) -> Result<()> {
        self.transport
            .send(message)
            .context("SMTP delivery failed")?;
        Ok(())
    }
}

/// Composes and sends the HTML job report. Delivery problems are logged and
/// reported as `false`, never propagated to the caller.
pub struct Mailer {
    transport: Arc<dyn ReportTransport>,
    sender: String,
}

impl Mailer {
    pub fn new(transport: Arc<dyn ReportTransport>, sender: String) -> Mailer {
        Mailer { transport, sender }
    }

    pub fn from_config() -> Result<Mailer> {
        Ok(Mailer::new(
            Arc::new(SmtpReportTransport::from_config()?),
            CONFIG.smtp_sender.clone(),
        ))
    }

    pub async fn send_report(&self, jobs: &[JobPosting], recipient: &str) -> bool {
        let html = report::render_report(jobs);
        let message = match self.compose(recipient, html) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!("failed to compose report email: {:#}", e);
                return false;
            }
        };

        // lettre's SmtpTransport is blocking, so keep it off the event loop.
        let transport = self.transport.clone();
        let result = tokio::task::spawn_blocking(move || transport.deliver(&message)).await;

        match result {
            Ok(Ok(())) => {
                tracing::info!("report email sent to {recipient}");
                true
            }
            Ok(Err(e)) => {
                tracing::error!("failed to send report email: {:#}", e);
                false
            }
            Err(e) => {
                tracing::error!("email delivery task failed: {e:?}");
                false
            }
        }
    }

    fn compose(&self, recipient: &str, html: String) -> Result<Message> {
        Message::builder()
            .from(self.sender.parse().context("Invalid sender address")?)
            .to(recipient.parse().context("Invalid recipient address")?)
            .subject(EMAIL_SUBJECT)
            .multipart(MultiPart::alternative().singlepart(SinglePart::html(html)))
            .context("Failed to build report message")
    }
}
