//! Transient overlays: the trade modal and toast notifications.

use crate::consts::cli_consts::timing;
use std::time::Instant;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ToastPhase {
    Visible,
    /// Sliding out; `progress` runs from 0 to 1.
    Exiting { progress: f64 },
    Gone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

impl Toast {
    pub fn phase(&self, now: Instant) -> ToastPhase {
        let age = now.saturating_duration_since(self.created_at);
        if age < timing::toast_display() {
            ToastPhase::Visible
        } else if age < timing::toast_lifetime() {
            let into_exit = age - timing::toast_display();
            let exit = timing::toast_lifetime() - timing::toast_display();
            ToastPhase::Exiting {
                progress: into_exit.as_secs_f64() / exit.as_secs_f64(),
            }
        } else {
            ToastPhase::Gone
        }
    }
}

/// Stack of live toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    next_id: u64,
    active: Vec<Toast>,
}

impl Toasts {
    /// Show a toast and return its id.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Toast {
            id,
            message: message.into(),
            severity,
            created_at: now,
        });
        id
    }

    /// Drop toasts whose lifetime has ended.
    pub fn prune(&mut self, now: Instant) {
        self.active.retain(|toast| toast.phase(now) != ToastPhase::Gone);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Ways the trade modal can be closed. None of them do anything else.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ModalAction {
    #[strum(serialize = "Connect Wallet")]
    ConnectWallet,
    #[strum(serialize = "Learn More")]
    LearnMore,
    #[strum(serialize = "close")]
    Close,
    #[strum(serialize = "backdrop")]
    Backdrop,
}

pub const TRADE_MODAL_TITLE: &str = "Start Trading STKR";
pub const TRADE_MODAL_BODY: &str = "Connect your wallet to start trading STKR and automatically donate to charity with every transaction.";

#[derive(Debug, Clone, PartialEq)]
pub struct TradeModal {
    pub opened_at: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn toast_lifecycle() {
        let t0 = Instant::now();
        let mut toasts = Toasts::default();
        let id = toasts.notify("Insufficient voting power!", Severity::Error, t0);
        let toast = toasts.iter().find(|t| t.id == id).unwrap().clone();

        assert_eq!(toast.phase(t0), ToastPhase::Visible);
        assert_eq!(toast.phase(t0 + ms(2_999)), ToastPhase::Visible);
        match toast.phase(t0 + ms(3_150)) {
            ToastPhase::Exiting { progress } => assert!((progress - 0.5).abs() < 1e-9),
            other => panic!("expected exit phase, got {:?}", other),
        }
        assert_eq!(toast.phase(t0 + ms(3_300)), ToastPhase::Gone);

        toasts.prune(t0 + ms(3_299));
        assert_eq!(toasts.len(), 1);
        toasts.prune(t0 + ms(3_300));
        assert!(toasts.is_empty());
    }

    #[test]
    fn toasts_stack_and_expire_independently() {
        let t0 = Instant::now();
        let mut toasts = Toasts::default();
        let first = toasts.notify("one", Severity::Info, t0);
        let second = toasts.notify("two", Severity::Success, t0 + ms(1_000));
        assert_ne!(first, second);
        toasts.prune(t0 + ms(3_500));
        let left: Vec<_> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["two"]);
    }

    #[test]
    fn labels() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(ModalAction::ConnectWallet.to_string(), "Connect Wallet");
    }
}
