use snafu::Snafu;

/// Errors that can occur while sending an email notification.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Collaborator failure, including template rendering errors.
    /// Passed through unmodified so callers can match the original
    /// kind.
    #[snafu(transparent)]
    Notification { source: notification::Error },

    /// Failed to build email message.
    #[snafu(display("Failed to build email message"))]
    BuildEmail,

    /// SMTP delivery failed.
    #[snafu(display("Failed to send email: {source}"))]
    Smtp { source: lettre::transport::smtp::Error },
}
