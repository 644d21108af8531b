//! HTTP mail relay.

use std::time::Duration;

use async_trait::async_trait;

use super::{Mailer, OutgoingMail};
use crate::error::{ContentError, Result};

/// Delivers mail by POSTing JSON to a transactional mail API.
///
/// Request body: `{"from", "to", "reply_to", "subject", "html"}` with a
/// bearer token. Any non-2xx response is a failure; there are no retries.
pub struct HttpMailer {
    endpoint: String,
    api_key: String,
    from: String,
    client: reqwest::Client,
}

impl HttpMailer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ContentError::Config("mail endpoint is empty".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ContentError::Config(format!("mail client: {e}")))?;
        Ok(Self {
            endpoint,
            api_key: api_key.into(),
            from: from.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<()> {
        let body = serde_json::json!({
            "from": self.from,
            "to": mail.to,
            "reply_to": mail.reply_to,
            "subject": mail.subject,
            "html": mail.html,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ContentError::mail(format!("failed to reach mail relay: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ContentError::mail(format!(
                "mail relay error {}: {}",
                status, error_text
            )));
        }

        tracing::info!(to = %mail.to, "contact mail sent");
        Ok(())
    }
}
