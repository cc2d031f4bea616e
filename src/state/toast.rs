//! Toast notification state.

use crate::constants;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A transient notification shown in an overlay until it expires.
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    ticks_left: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            ticks_left: constants::TOAST_TICKS,
        }
    }

    /// Ages the toast by one tick; returns false once it should be dropped.
    pub fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_budget() {
        let mut toast = Toast::new("done", ToastKind::Success);
        for _ in 0..constants::TOAST_TICKS - 1 {
            assert!(toast.tick());
        }
        assert!(!toast.tick());
    }
}
