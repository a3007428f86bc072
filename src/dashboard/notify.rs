//! Transient notification channel
//!
//! A publish/subscribe channel for short user-facing messages, shared by
//! every page. Handles are cheap to clone; each subscriber sees every event
//! published after it subscribed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

pub type NotificationId = u64;

/// Severity level of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

/// A notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: Instant,
}

/// What subscribers receive
#[derive(Debug, Clone)]
pub enum NotificationEvent {
    Shown(Notification),
    Dismissed(NotificationId),
}

#[derive(Debug, Clone)]
pub struct NotificationBus {
    sender: broadcast::Sender<NotificationEvent>,
    next_id: Arc<AtomicU64>,
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.sender.subscribe()
    }

    /// Publish a message and return its id for a later `dismiss`.
    ///
    /// Publishing with no subscribers drops the message.
    pub fn publish(&self, message: impl Into<String>, level: NotificationLevel) -> NotificationId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id,
            message: message.into(),
            level,
            timestamp: Instant::now(),
        };
        tracing::debug!(id, level = ?notification.level, "notification: {}", notification.message);
        let _ = self.sender.send(NotificationEvent::Shown(notification));
        id
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.publish(message, NotificationLevel::Info)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.publish(message, NotificationLevel::Warning)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.publish(message, NotificationLevel::Error)
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.publish(message, NotificationLevel::Success)
    }

    pub fn dismiss(&self, id: NotificationId) {
        let _ = self.sender.send(NotificationEvent::Dismissed(id));
    }
}

/// Drain everything currently queued on a receiver, skipping over lag gaps
pub fn drain(receiver: &mut broadcast::Receiver<NotificationEvent>) -> Vec<NotificationEvent> {
    let mut events = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!("dropped {skipped} notifications");
            }
            Err(_) => break,
        }
    }
    events
}

/// Notifications shown and not dismissed, in publish order
pub fn visible(events: &[NotificationEvent]) -> Vec<&Notification> {
    let mut shown: Vec<&Notification> = Vec::new();
    for event in events {
        match event {
            NotificationEvent::Shown(n) => shown.push(n),
            NotificationEvent::Dismissed(id) => shown.retain(|n| n.id != *id),
        }
    }
    shown
}
