use async_trait::async_trait;

use crate::Error;

/// An outbound email, composed immediately before transport and
/// discarded after the send.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Trait for mail transports that deliver composed messages.
///
/// Each transport owns whatever configuration it needs to reach its
/// mail facility; the adapter never touches transport settings.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Delivers one message. Single best-effort call, no retries.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be built or delivered.
    async fn send_email(&self, message: &EmailMessage) -> Result<(), Error>;
}
