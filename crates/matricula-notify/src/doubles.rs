//! Notifier test doubles.
//!
//! Exported from the crate (not `#[cfg(test)]`) so the ledger and API
//! integration tests can drive the persist-then-notify flow without a
//! mail endpoint.

use async_trait::async_trait;
use matricula_core::{Error, Result};
use tokio::sync::Mutex;

use crate::{Confirmation, Notifier};

/// Captures every delivered message for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Confirmation>>,
}

impl RecordingNotifier {
    /// Creates a recorder with an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, in order.
    pub async fn sent(&self) -> Vec<Confirmation> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &Confirmation) -> Result<()> {
        self.sent.lock().await.push(message.clone());
        Ok(())
    }
}

/// Fails every delivery, for exercising the "saved but unconfirmed" path.
#[derive(Default)]
pub struct FailingNotifier;

impl FailingNotifier {
    /// Creates the failing double.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _message: &Confirmation) -> Result<()> {
        Err(Error::notification("delivery refused by test double"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn message() -> Confirmation {
        Confirmation {
            recipient: "ana@x.com".to_string(),
            subject: "subject".to_string(),
            html_body: "<html></html>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_recording_notifier_captures_messages() {
        let notifier = RecordingNotifier::new();
        notifier.notify(&message()).await.unwrap();
        let sent = notifier.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "ana@x.com");
    }

    #[tokio::test]
    async fn test_failing_notifier_reports_notification_error() {
        let err = FailingNotifier::new().notify(&message()).await.unwrap_err();
        assert!(matches!(err, Error::Notification { .. }));
    }
}
