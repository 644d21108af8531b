//! Contact form mail delivery.
//!
//! The API composes an [`OutgoingMail`] from the submitted form and hands it
//! to a [`Mailer`]. Delivery itself is an external service; see
//! [`HttpMailer`] for the relay used in production and [`RecordingMailer`]
//! for tests.

mod http;
mod mock;

pub use http::HttpMailer;
pub use mock::RecordingMailer;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

/// Abstraction over mail delivery backends.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<()>;
}

/// Contact form submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }
}

/// A composed message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

impl OutgoingMail {
    /// Build the notification sent to the site owner.
    pub fn from_contact(contact: &ContactMessage, recipient: &str) -> Self {
        let html = format!(
            "<h2>New Contact Form Submission</h2>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Subject:</strong> {}</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{}</p>\n",
            escape_html(&contact.name),
            escape_html(&contact.email),
            escape_html(&contact.subject),
            escape_html(&contact.message).replace('\n', "<br>"),
        );
        Self {
            to: recipient.to_string(),
            reply_to: contact.email.clone(),
            subject: format!("Portfolio Contact: {}", contact.subject),
            html,
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Used when no relay is configured. Every send fails.
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, _mail: &OutgoingMail) -> Result<()> {
        Err(ContentError::mail("mail delivery is not configured"))
    }
}
