//! # Email Notification Adapter
//!
//! Adapts the notification framework's generic send contract to an
//! email transport. Control flow is strictly linear: resolve the
//! recipient through the backend, merge the configured base URL into
//! the render context, render, compose, send.
//!
//! Retries, queueing, delivery guarantees and persistence are the
//! collaborators' business, not this crate's.

mod config;
mod error;
pub mod smtp;
mod transport;

use notification::{
    Notification, NotificationBackend, NotificationContext, TemplatedEmailRenderer,
};

pub use self::{
    config::EmailConfig,
    error::Error,
    transport::{EmailMessage, MailTransport},
};

/// Sends notifications as email over an injected [`MailTransport`].
///
/// Collaborators are resolved by the caller and injected at
/// construction; the adapter holds no global state.
pub struct EmailNotificationAdapter<B, R, M> {
    backend: B,
    renderer: R,
    transport: M,
    config: EmailConfig,
}

impl<B, R, M> EmailNotificationAdapter<B, R, M>
where
    B: NotificationBackend,
    R: TemplatedEmailRenderer,
    M: MailTransport,
{
    pub fn new(backend: B, renderer: R, transport: M, config: EmailConfig) -> Self {
        Self { backend, renderer, transport, config }
    }

    /// Sends the notification to its user through email.
    ///
    /// # Errors
    ///
    /// Propagates the renderer's template rendering error unmodified,
    /// backend lookup failures, and transport failures. A single send
    /// is a single best-effort call: no retries, no batching.
    pub async fn send(
        &self,
        notification: &Notification,
        context: &NotificationContext,
    ) -> Result<(), Error> {
        let user_email =
            self.backend.user_email_from_notification(notification.id).await?;

        let mut context = context.clone();
        let _previous = context.insert(
            "base_url".to_string(),
            serde_json::Value::String(self.config.base_url()),
        );

        let template = self.renderer.render(notification, &context)?;

        let message = EmailMessage {
            from: self.config.from_address.clone(),
            to: vec![user_email],
            bcc: self.config.default_bcc_emails.clone(),
            subject: template.subject.trim().to_string(),
            text_body: template.body.clone(),
            html_body: template.body,
        };

        self.transport.send_email(&message).await?;

        tracing::info!(
            notification_id = %notification.id,
            to = %message.to.join(", "),
            "Sent email notification"
        );
        Ok(())
    }
}
