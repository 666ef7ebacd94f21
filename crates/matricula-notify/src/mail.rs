//! HTTP mail API delivery.
//!
//! Posts rendered confirmations as JSON to a mail-delivery endpoint with
//! bearer authentication. Transport and non-2xx responses surface as
//! notification errors; the sender never retries.

use async_trait::async_trait;
use matricula_core::{Error, Result};
use serde::Serialize;

use crate::{Confirmation, Notifier};

/// Wire payload accepted by the mail endpoint.
#[derive(Debug, Serialize)]
struct OutgoingMail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Notifier delivering through an HTTP mail API.
pub struct MailApiNotifier {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    from: String,
}

impl MailApiNotifier {
    /// Creates a sender for the given endpoint.
    ///
    /// `endpoint` is the full URL messages are POSTed to; `token` is sent
    /// as a bearer credential; `from` becomes the sender address on every
    /// message.
    pub fn new<E, T, F>(endpoint: E, token: T, from: F) -> Self
    where
        E: Into<String>,
        T: Into<String>,
        F: Into<String>,
    {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
            from: from.into(),
        }
    }
}

#[async_trait]
impl Notifier for MailApiNotifier {
    async fn notify(&self, message: &Confirmation) -> Result<()> {
        tracing::debug!(recipient = %message.recipient, "posting confirmation to mail endpoint");

        let payload = OutgoingMail {
            from: &self.from,
            to: &message.recipient,
            subject: &message.subject,
            html: &message.html_body,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::notification_with_source("mail endpoint unreachable", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::notification(format!(
                "mail endpoint returned {status}: {body}"
            )));
        }

        tracing::info!(recipient = %message.recipient, "confirmation delivered");
        Ok(())
    }
}
