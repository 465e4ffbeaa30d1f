use std::time::Duration;

use alloy_primitives::TxHash;
use strum_macros::{Display, EnumIter};

/// The two write paths of the demo. Each gets its own independent
/// [`TriggerState`] and may be in flight concurrently with the other.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    IncrementerCall,
    MessengerCall,
}

impl TriggerKind {
    pub fn idle_label(&self) -> &'static str {
        match self {
            TriggerKind::IncrementerCall => "Increment",
            TriggerKind::MessengerCall => "Send Message",
        }
    }

    pub fn success_label(&self) -> &'static str {
        match self {
            TriggerKind::IncrementerCall => "Increment Sent!",
            TriggerKind::MessengerCall => "Message Sent!",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
pub enum TriggerStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl TriggerStatus {
    /// How long a terminal outcome stays on screen before falling back to Idle.
    pub fn display_window(&self) -> Option<Duration> {
        match self {
            TriggerStatus::Success => Some(Duration::from_secs(5)),
            TriggerStatus::Error => Some(Duration::from_secs(3)),
            _ => None,
        }
    }
}

/// Lifecycle state of one write trigger.
///
/// `busy` spans submission through receipt and is what disables the control;
/// `status` is the displayed outcome. `epoch` increments on every transition
/// so an auto-reset timer armed for an earlier cycle cannot clobber a later
/// one.
#[derive(Clone, Debug, Default)]
pub struct TriggerState {
    status: TriggerStatus,
    busy: bool,
    epoch: u64,
    last_tx_hash: Option<TxHash>,
}

impl TriggerState {
    pub fn status(&self) -> TriggerStatus {
        self.status
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn last_tx_hash(&self) -> Option<TxHash> {
        self.last_tx_hash
    }

    /// The control is disabled while a cycle is in flight or the success
    /// banner is showing.
    pub fn is_disabled(&self) -> bool {
        self.busy || self.status == TriggerStatus::Success
    }

    /// Accept a new cycle. Returns false when the control is disabled, in
    /// which case nothing changes and the trigger must be dropped.
    pub fn begin(&mut self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.busy = true;
        true
    }

    /// Submission accepted by the wallet layer.
    pub fn submitted(&mut self, tx_hash: TxHash) {
        self.status = TriggerStatus::Pending;
        self.last_tx_hash = Some(tx_hash);
        self.epoch += 1;
    }

    /// Receipt observed.
    pub fn confirmed(&mut self) {
        self.status = TriggerStatus::Success;
        self.busy = false;
        self.epoch += 1;
    }

    /// Submission refused before a transaction existed.
    pub fn failed(&mut self) {
        self.status = TriggerStatus::Error;
        self.busy = false;
        self.epoch += 1;
    }

    /// Receipt wait gave up. The displayed status is left untouched; only the
    /// in-flight guard clears so the control re-enables.
    pub fn release(&mut self) {
        self.busy = false;
    }

    /// Display-window expiry for the cycle identified by `epoch`. A stale
    /// epoch is ignored.
    pub fn reset_display(&mut self, epoch: u64) {
        if self.epoch != epoch {
            return;
        }
        if matches!(self.status, TriggerStatus::Success | TriggerStatus::Error) {
            self.status = TriggerStatus::Idle;
            self.epoch += 1;
        }
    }

    /// Button caption, mirroring the precedence of the panel it drives:
    /// in-flight phases win, then the wrong-chain prompt, then the success
    /// banner, then the idle caption.
    pub fn button_label(&self, kind: TriggerKind, switch_target: Option<&str>) -> String {
        if self.busy {
            return if self.status == TriggerStatus::Pending {
                "Waiting for confirmation...".to_string()
            } else {
                "Sending...".to_string()
            };
        }
        if let Some(chain_name) = switch_target {
            return format!("Switch to {chain_name}");
        }
        if self.status == TriggerStatus::Success {
            return kind.success_label().to_string();
        }
        kind.idle_label().to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::TxHash;

    fn hash(byte: u8) -> TxHash {
        TxHash::repeat_byte(byte)
    }

    #[test]
    fn happy_path_cycle() {
        let mut state = TriggerState::default();
        assert_eq!(state.status(), TriggerStatus::Idle);

        assert!(state.begin());
        assert!(state.is_disabled());

        state.submitted(hash(0x11));
        assert_eq!(state.status(), TriggerStatus::Pending);
        assert!(state.is_disabled());

        state.confirmed();
        assert_eq!(state.status(), TriggerStatus::Success);
        // success banner keeps the control disabled until the window expires
        assert!(state.is_disabled());

        let epoch = state.epoch();
        state.reset_display(epoch);
        assert_eq!(state.status(), TriggerStatus::Idle);
        assert!(!state.is_disabled());
    }

    #[test]
    fn duplicate_trigger_is_dropped_while_busy() {
        let mut state = TriggerState::default();
        assert!(state.begin());
        assert!(!state.begin());

        state.submitted(hash(0x22));
        assert!(!state.begin());
    }

    #[test]
    fn sync_failure_never_visits_pending() {
        let mut state = TriggerState::default();
        assert!(state.begin());
        // submission refused: Idle -> Error with no Pending in between
        assert_eq!(state.status(), TriggerStatus::Idle);
        state.failed();
        assert_eq!(state.status(), TriggerStatus::Error);
        assert!(!state.is_disabled());

        let epoch = state.epoch();
        state.reset_display(epoch);
        assert_eq!(state.status(), TriggerStatus::Idle);
    }

    #[test]
    fn stale_reset_does_not_clobber_new_cycle() {
        let mut state = TriggerState::default();
        assert!(state.begin());
        state.failed();
        let error_epoch = state.epoch();

        // user re-triggers inside the error display window
        assert!(state.begin());
        state.submitted(hash(0x33));

        state.reset_display(error_epoch);
        assert_eq!(state.status(), TriggerStatus::Pending);
    }

    #[test]
    fn release_reenables_without_touching_status() {
        let mut state = TriggerState::default();
        assert!(state.begin());
        state.submitted(hash(0x44));

        state.release();
        assert_eq!(state.status(), TriggerStatus::Pending);
        assert!(!state.is_disabled());
    }

    #[test]
    fn display_windows() {
        assert_eq!(TriggerStatus::Success.display_window(), Some(Duration::from_secs(5)));
        assert_eq!(TriggerStatus::Error.display_window(), Some(Duration::from_secs(3)));
        assert_eq!(TriggerStatus::Idle.display_window(), None);
        assert_eq!(TriggerStatus::Pending.display_window(), None);
    }

    #[test]
    fn button_labels() {
        let mut state = TriggerState::default();
        assert_eq!(state.button_label(TriggerKind::IncrementerCall, None), "Increment");
        assert_eq!(state.button_label(TriggerKind::MessengerCall, None), "Send Message");
        assert_eq!(state.button_label(TriggerKind::IncrementerCall, Some("interop-alpha-0")), "Switch to interop-alpha-0");

        assert!(state.begin());
        assert_eq!(state.button_label(TriggerKind::IncrementerCall, None), "Sending...");

        state.submitted(TxHash::repeat_byte(0x55));
        assert_eq!(state.button_label(TriggerKind::IncrementerCall, None), "Waiting for confirmation...");

        state.confirmed();
        assert_eq!(state.button_label(TriggerKind::IncrementerCall, None), "Increment Sent!");
        assert_eq!(state.button_label(TriggerKind::MessengerCall, None), "Message Sent!");
    }
}
