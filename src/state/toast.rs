//! Transient toast notification state.
//!
//! DESIGN
//! ======
//! Single-slot model: the page shows one toast at a time and each lifecycle
//! step replaces the previous one, so a loading toast morphs into the success
//! or error toast for the same submission. The replace counter lets dismiss
//! timers detect whether their toast is still the one on screen.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Work in flight; persists until replaced.
    Loading,
    /// Completed successfully; auto-dismissed.
    Success,
    /// Failed; auto-dismissed.
    Error,
}

/// A single toast notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Toast slot shared via context.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
    seq: u64,
}

impl ToastState {
    /// Replace the current toast.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.current = Some(Toast { kind, message: message.into() });
        self.seq += 1;
    }

    /// Clear the current toast.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Kind of the toast currently on screen, if any.
    pub fn kind(&self) -> Option<ToastKind> {
        self.current.as_ref().map(|t| t.kind)
    }

    /// Message of the toast currently on screen, if any.
    pub fn message(&self) -> Option<String> {
        self.current.as_ref().map(|t| t.message.clone())
    }

    /// Replace counter; bumped on every `show`.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}
