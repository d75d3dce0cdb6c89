//! Transient user notifications.
//!
//! Producers build a [`Notification`] and hand it to a [`NotificationSink`].
//! The terminal UI's sink is the [`ToastQueue`].

mod toast;

pub use toast::{ActiveToast, ToastQueue};

use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

pub const SUCCESS_TITLE: &str = "Inscription réussie.";
pub const SUCCESS_DESCRIPTION: &str = "Vos informations ont été soumises avec succès.";
pub const ERROR_TITLE: &str = "Erreur d'inscription.";
pub const GENERIC_ERROR_DESCRIPTION: &str =
    "Une erreur s'est produite lors de l'envoi de vos informations.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub status: Severity,
    pub duration: Duration,
    pub closable: bool,
}

impl Notification {
    /// Confirmation shown after the profile was created.
    pub fn submitted(duration: Duration) -> Self {
        Self {
            title: SUCCESS_TITLE.to_string(),
            description: SUCCESS_DESCRIPTION.to_string(),
            status: Severity::Success,
            duration,
            closable: true,
        }
    }

    /// Failure report. Falls back to a generic description when the server
    /// gave no message.
    pub fn submit_failed(message: Option<&str>, duration: Duration) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            description: message.unwrap_or(GENERIC_ERROR_DESCRIPTION).to_string(),
            status: Severity::Error,
            duration,
            closable: true,
        }
    }
}

/// Receives notifications to display.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
