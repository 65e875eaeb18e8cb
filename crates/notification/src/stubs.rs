//! Test doubles for backends and renderers.
//!
//! Shipped as a regular module so adapter crates can exercise their
//! send paths without a real persistence layer or template engine.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::{TemplateRenderSnafu, UnknownNotificationSnafu},
    Error, Notification, NotificationBackend, NotificationContext, RenderedTemplate,
    TemplatedEmailRenderer,
};

/// In-memory backend holding a fixed set of notifications.
///
/// Lookups for a known notification id return the configured user
/// email address, `"testemail@example.com"` by default.
pub struct InMemoryNotificationBackend {
    notifications: Vec<Notification>,
    user_email: String,
}

impl InMemoryNotificationBackend {
    #[must_use]
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications, user_email: "testemail@example.com".to_string() }
    }

    #[must_use]
    pub fn with_user_email(mut self, user_email: impl Into<String>) -> Self {
        self.user_email = user_email.into();
        self
    }
}

#[async_trait]
impl NotificationBackend for InMemoryNotificationBackend {
    async fn user_email_from_notification(&self, id: Uuid) -> Result<String, Error> {
        if self.notifications.iter().any(|notification| notification.id == id) {
            Ok(self.user_email.clone())
        } else {
            UnknownNotificationSnafu { id }.fail()
        }
    }
}

/// Renderer that echoes the notification's templates as the rendered
/// output, without interpreting them.
pub struct EchoTemplateRenderer;

impl TemplatedEmailRenderer for EchoTemplateRenderer {
    fn render(
        &self,
        notification: &Notification,
        _context: &NotificationContext,
    ) -> Result<RenderedTemplate, Error> {
        Ok(RenderedTemplate {
            subject: notification.subject_template.clone(),
            body: notification.body_template.clone(),
        })
    }
}

/// Renderer that always fails with a template rendering error.
pub struct FailingTemplateRenderer;

impl TemplatedEmailRenderer for FailingTemplateRenderer {
    fn render(
        &self,
        _notification: &Notification,
        _context: &NotificationContext,
    ) -> Result<RenderedTemplate, Error> {
        TemplateRenderSnafu { reason: "stub renderer always fails" }.fail()
    }
}
