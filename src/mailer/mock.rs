//! Recording mailer for tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Mailer, OutgoingMail};
use crate::error::{ContentError, Result};

/// Keeps every message instead of sending it. Can be told to fail.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
    failure: Option<String>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(reason.into()),
        }
    }

    pub async fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<()> {
        if let Some(reason) = &self.failure {
            return Err(ContentError::mail(reason.clone()));
        }
        self.sent.lock().await.push(mail.clone());
        Ok(())
    }
}
