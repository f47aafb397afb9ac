//! Outgoing mail: the `Mailer` seam, message content, and the non-SMTP mailers.

mod smtp;

pub use smtp::SmtpMailer;

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

use crate::config::MailConfig;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// A plain-text message ready to hand to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    /// Password-reset instructions carrying a one-time token.
    pub fn password_reset(to: &str, first_name: &str, token: &str, ttl_secs: u64) -> Self {
        let minutes = ttl_secs.div_ceil(60);
        OutgoingMail {
            to: to.to_string(),
            subject: "Planetary API password reset".into(),
            body: format!(
                "Hello {first_name},\n\n\
                 A password reset was requested for this address. To choose a new password, \
                 POST the token below with a new_password to /reset_password. \
                 It expires in {minutes} minutes and works once.\n\n\
                 Reset token: {token}\n\n\
                 If you did not ask for this, you can ignore this message.\n"
            ),
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

/// Build the mailer selected by config: SMTP when a host is set, otherwise log-only.
pub fn from_config(config: &MailConfig) -> Result<Arc<dyn Mailer>, MailError> {
    match &config.smtp {
        Some(smtp) => Ok(Arc::new(SmtpMailer::new(smtp, &config.from_address)?)),
        None => {
            tracing::info!("SMTP_HOST not set; outgoing mail will only be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}

/// Drops each message with a warning. The body, which may carry a reset token,
/// is only logged at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        tracing::warn!(to = %mail.to, subject = %mail.subject, "mail not delivered (no SMTP configured)");
        tracing::debug!(to = %mail.to, body = %mail.body, "undelivered mail body");
        Ok(())
    }
}

/// Keeps sent messages in memory. Used by tests to read back what was mailed.
#[derive(Clone, Debug, Default)]
pub struct MemoryMailer {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).push(mail);
        Ok(())
    }
}
