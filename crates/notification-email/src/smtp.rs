//! SMTP mail transport backed by lettre's `AsyncSmtpTransport`.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{EmailMessage, Error, MailTransport};

/// SMTP mail transport.
///
/// Connects without TLS, which suits local relays such as Mailpit or
/// a trusted network hop.
pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    /// Creates a transport targeting `host:port`.
    #[must_use]
    pub fn new(host: &str, port: u16) -> Self {
        let transport =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(port).build();

        Self { transport }
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), Error> {
        let email = build_message(message)?;

        if let Err(source) = self.transport.send(email).await {
            tracing::error!(error = ?source, "Failed to send email over SMTP");
            return Err(Error::Smtp { source });
        }

        Ok(())
    }
}

/// Builds a multipart (plain + HTML) lettre message.
///
/// # Errors
///
/// Returns an error if any address does not parse or the message
/// cannot be assembled.
fn build_message(message: &EmailMessage) -> Result<Message, Error> {
    let mut builder = Message::builder()
        .from(message.from.parse::<Mailbox>().map_err(|_| Error::BuildEmail)?)
        .subject(message.subject.clone());

    for to in &message.to {
        builder = builder.to(to.parse::<Mailbox>().map_err(|_| Error::BuildEmail)?);
    }

    for bcc in &message.bcc {
        builder = builder.bcc(bcc.parse::<Mailbox>().map_err(|_| Error::BuildEmail)?);
    }

    builder
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(message.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(message.html_body.clone()),
                ),
        )
        .map_err(|_| Error::BuildEmail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> EmailMessage {
        EmailMessage {
            from: "sender@example.com".to_string(),
            to: vec!["recipient@example.com".to_string()],
            bcc: vec!["audit@example.com".to_string()],
            subject: "Test Subject".to_string(),
            text_body: "Test Body".to_string(),
            html_body: "<p>Test Body</p>".to_string(),
        }
    }

    #[test]
    fn test_build_message() {
        let message = build_message(&sample_message()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("sender@example.com"));
        assert!(formatted.contains("recipient@example.com"));
        assert!(formatted.contains("Test Subject"));
        assert!(formatted.contains("Test Body"));

        // BCC recipients travel in the envelope, not the visible headers.
        assert_eq!(message.envelope().to().len(), 2);
    }

    #[test]
    fn test_build_message_invalid_from() {
        let mut message = sample_message();
        message.from = "invalid-email".to_string();

        assert!(build_message(&message).is_err());
    }

    #[test]
    fn test_build_message_invalid_recipient() {
        let mut message = sample_message();
        message.to = vec!["invalid-email".to_string()];

        assert!(build_message(&message).is_err());
    }
}
