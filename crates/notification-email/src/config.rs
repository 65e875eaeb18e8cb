use serde::{Deserialize, Serialize};

/// Configuration for the email notification adapter.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Sender address stamped on every outgoing message.
    pub from_address: String,

    /// Addresses blind-copied on every outgoing message. Absent
    /// configuration means no BCC.
    #[serde(default = "EmailConfig::default_bcc")]
    pub default_bcc_emails: Vec<String>,

    #[serde(default = "EmailConfig::default_protocol")]
    pub base_url_protocol: String,

    #[serde(default = "EmailConfig::default_domain")]
    pub base_url_domain: String,
}

impl EmailConfig {
    #[inline]
    #[must_use]
    pub const fn default_bcc() -> Vec<String> { Vec::new() }

    #[inline]
    #[must_use]
    pub fn default_protocol() -> String { "https".to_string() }

    #[inline]
    #[must_use]
    pub fn default_domain() -> String { "localhost".to_string() }

    /// Base URL merged into every render context under `"base_url"`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.base_url_protocol, self.base_url_domain)
    }
}
