use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub at: DateTime<Utc>
}

/// Pending transient messages, oldest first.
#[derive(Debug, Default)]
pub struct Notifications {
    pending: Vec<Toast>
}

impl Notifications {
    pub fn push(&mut self, kind: ToastKind, message: &str) {
        self.pending.push(Toast {
            kind,
            message: message.to_string(),
            at: Utc::now()
        });
    }

    pub fn success(&mut self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    pub fn pending(&self) -> &[Toast] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }
}
