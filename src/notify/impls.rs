// Standard library
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use chrono::Local;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

// Project imports
use crate::settings::Settings;

// Current module imports
use super::constants::{SMTP_TIMEOUT_SECS, TIMESTAMP_FORMAT};
use super::errors::NotifyError;
use super::templates;
use super::traits::Notifier;
use super::types::{EmailNotifier, NotificationEvent};

impl EmailNotifier {
    /// Builds the SMTP transport once; sender and recipient addresses
    /// are parsed here so a bad address fails at startup rather than on
    /// every send.
    pub fn new(settings: &Settings) -> Result<Self, NotifyError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_host)?
            .port(settings.smtp_port)
            .credentials(Credentials::new(
                settings.email_from.clone(),
                settings.email_password.clone(),
            ))
            .timeout(Some(Duration::from_secs(SMTP_TIMEOUT_SECS)))
            .build();

        Ok(Self {
            transport,
            from: settings.email_from.parse::<Mailbox>()?,
            to: settings.email_to.parse::<Mailbox>()?,
        })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    type Error = NotifyError;

    async fn notify(&self, event: &NotificationEvent) -> Result<(), Self::Error> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(templates::subject(event))
            .header(ContentType::TEXT_PLAIN)
            .body(templates::body(event, &timestamp))?;

        self.transport.send(message).await?;

        debug!(to = %self.to, "Notification email submitted");
        Ok(())
    }
}
