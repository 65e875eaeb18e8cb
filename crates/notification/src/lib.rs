//! # Notification Crate
//!
//! Core contracts for the notification dispatch framework: the
//! persisted [`Notification`] record, the ephemeral
//! [`RenderedTemplate`], and the collaborator traits implemented by
//! notification backends and template renderers.
//!
//! Concrete delivery channels (currently email) live in sibling
//! adapter crates and depend only on these contracts.

mod error;
pub mod stubs;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub use error::Error;

/// Context handed to template renderers. Keys are template variable
/// names, values arbitrary JSON.
pub type NotificationContext = BTreeMap<String, serde_json::Value>;

/// Delivery channel of a notification.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Email,
}

/// Lifecycle status of a notification record.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    PendingSend,
    Sent,
    Failed,
    Read,
    Cancelled,
}

/// A notification record.
///
/// Owned and persisted by the backend; adapters only read it. The
/// `*_template` fields are opaque to this crate and interpreted by
/// the template renderer.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Notification {
    pub id: Uuid,

    pub user_id: Uuid,

    pub notification_type: NotificationType,

    pub title: String,

    pub subject_template: String,

    pub body_template: String,

    /// Preview line shown by some email clients. Not every renderer
    /// uses it.
    pub preheader_template: Option<String>,

    pub context_name: String,

    pub context_kwargs: NotificationContext,

    /// Earliest send time. `None` means send immediately.
    pub send_after: Option<OffsetDateTime>,

    pub status: NotificationStatus,
}

/// Output of a template renderer, produced per send and discarded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedTemplate {
    pub subject: String,
    pub body: String,
}

/// Trait for notification backends owning persistence and user lookup.
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    /// Resolves the recipient email address for a stored notification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNotification`] if no notification with
    /// the given id exists.
    async fn user_email_from_notification(&self, id: Uuid) -> Result<String, Error>;
}

/// Trait for renderers producing subject and body text from a
/// notification and a render context.
pub trait TemplatedEmailRenderer: Send + Sync {
    /// Renders the notification's templates against `context`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateRender`] when the templates cannot be
    /// rendered.
    fn render(
        &self,
        notification: &Notification,
        context: &NotificationContext,
    ) -> Result<RenderedTemplate, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_serializes_snake_case() {
        let value = serde_json::to_value(NotificationType::Email).unwrap();
        assert_eq!(value, serde_json::json!("email"));
    }

    #[test]
    fn test_notification_status_serializes_snake_case() {
        let value = serde_json::to_value(NotificationStatus::PendingSend).unwrap();
        assert_eq!(value, serde_json::json!("pending_send"));

        let parsed: NotificationStatus = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, NotificationStatus::PendingSend);
    }
}
