//! Example: Send one email notification through a local SMTP relay.
//!
//! # Prerequisites
//!
//! A local SMTP server listening on `localhost:1025`, e.g. Mailpit:
//!
//! ```bash
//! mailpit --smtp 0.0.0.0:1025
//! cargo run --example send_email_notification
//! ```

use std::collections::BTreeMap;

use notification::{
    stubs::{EchoTemplateRenderer, InMemoryNotificationBackend},
    Notification, NotificationStatus, NotificationType,
};
use notification_email::{smtp::SmtpMailTransport, EmailConfig, EmailNotificationAdapter};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), notification_email::Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting email notification example");

    let notification = Notification {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        notification_type: NotificationType::Email,
        title: "Welcome".to_string(),
        subject_template: "Welcome aboard".to_string(),
        body_template: "Thanks for signing up. Visit us any time.".to_string(),
        preheader_template: None,
        context_name: "welcome".to_string(),
        context_kwargs: BTreeMap::new(),
        send_after: None,
        status: NotificationStatus::PendingSend,
    };

    let backend = InMemoryNotificationBackend::new(vec![notification.clone()])
        .with_user_email("user@example.com");

    let config = EmailConfig {
        from_address: "noreply@example.com".to_string(),
        default_bcc_emails: Vec::new(),
        base_url_protocol: "http".to_string(),
        base_url_domain: "localhost:8080".to_string(),
    };

    let adapter = EmailNotificationAdapter::new(
        backend,
        EchoTemplateRenderer,
        SmtpMailTransport::new("localhost", 1025),
        config,
    );

    tracing::info!("Sending email notification");
    adapter.send(&notification, &BTreeMap::new()).await?;

    tracing::info!("✓ Email sent successfully!");
    Ok(())
}
