use snafu::Snafu;
use uuid::Uuid;

/// Errors raised by notification collaborators.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Template rendering failed.
    #[snafu(display("Failed to render notification template: {reason}"))]
    TemplateRender { reason: String },

    /// No notification with the given id is known to the backend.
    #[snafu(display("Unknown notification: {id}"))]
    UnknownNotification { id: Uuid },
}
