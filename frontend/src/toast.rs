//! Short-lived user notifications ("Added to cart!" and friends).
//!
//! Time is passed in explicitly so the queue stays testable; the UI uses `Utc::now()`.

use chrono::{DateTime, Duration, Utc};

pub const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    pub fn lifetime(&self) -> Duration {
        match self {
            ToastKind::Success | ToastKind::Info => Duration::milliseconds(3000),
            ToastKind::Warning => Duration::milliseconds(3500),
            ToastKind::Error => Duration::milliseconds(4000),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.prune(now);
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            expires_at: now + kind.lifetime(),
        });
        if self.toasts.len() > MAX_VISIBLE {
            let excess = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(0..excess);
        }
        id
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.push_at(kind, message, Utc::now())
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop toasts whose time is up.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Toasts still alive at `now`, oldest first.
    pub fn active_at(&self, now: DateTime<Utc>) -> Vec<Toast> {
        self.toasts
            .iter()
            .filter(|t| t.expires_at > now)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
