use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;

use super::{Notification, NotificationSink};

#[derive(Debug, Clone)]
pub struct ActiveToast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl ActiveToast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.notification.duration
    }
}

/// Shared queue of toasts currently on screen.
///
/// Clones share the same queue, so the submission path and the renderer can
/// each hold one.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<Vec<ActiveToast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_at(&self, notification: Notification, now: Instant) {
        self.inner.lock().push(ActiveToast {
            notification,
            shown_at: now,
        });
    }

    /// Drops toasts whose duration has elapsed. Returns how many were removed.
    pub fn expire(&self, now: Instant) -> usize {
        let mut toasts = self.inner.lock();
        let before = toasts.len();
        toasts.retain(|toast| !toast.is_expired(now));
        before - toasts.len()
    }

    /// Closes the newest closable toast.
    pub fn dismiss_latest(&self) -> bool {
        let mut toasts = self.inner.lock();
        match toasts.iter().rposition(|toast| toast.notification.closable) {
            Some(index) => {
                toasts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Active toasts, newest first.
    pub fn snapshot(&self) -> Vec<ActiveToast> {
        self.inner.lock().iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }
}
