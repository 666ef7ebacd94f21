//! # matricula-notify
//!
//! Confirmation delivery for the Matricula enrollment service.
//!
//! Provides:
//! - [`Confirmation`] — a rendered message (recipient, subject, HTML body)
//! - [`Notifier`] — the delivery contract the ledger calls after a
//!   successful write
//! - [`MailApiNotifier`] — delivery through an HTTP mail API
//! - [`RecordingNotifier`] / [`FailingNotifier`] — test doubles
//!
//! Delivery failures surface as [`matricula_core::Error::Notification`]
//! and are never retried here: by the time a notifier runs, the
//! registration is already persisted, and the caller decides what "saved
//! but unconfirmed" should look like.

pub mod doubles;
pub mod mail;
pub mod template;

use async_trait::async_trait;
use matricula_core::Result;

pub use doubles::{FailingNotifier, RecordingNotifier};
pub use mail::MailApiNotifier;
pub use template::confirmation_for;

/// A rendered confirmation message, ready to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Destination address.
    pub recipient: String,
    /// Message subject line.
    pub subject: String,
    /// HTML message body.
    pub html_body: String,
}

/// Delivery contract for enrollment confirmations.
///
/// Implementations must not retry internally; a single failed attempt is
/// reported to the caller as a notification error.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one confirmation message.
    async fn notify(&self, message: &Confirmation) -> Result<()>;
}
