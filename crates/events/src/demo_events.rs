use alloy_primitives::TxHash;
use interop_types::TriggerKind;

/// User intents arriving from the web surface (or any other front door).
/// Both action drivers consume the same channel and react to their own kind.
#[derive(Clone, Debug)]
pub enum ActionCommand {
    Trigger(TriggerKind),
}

#[derive(Clone, Debug)]
pub enum TxLifecycleEvent {
    /// The wallet layer accepted the submission and returned a hash.
    Submitted { kind: TriggerKind, tx_hash: TxHash },
    /// A receipt for the submitted transaction was observed.
    Confirmed { kind: TriggerKind, tx_hash: TxHash, block_number: Option<u64> },
    /// The submission was refused before a transaction existed.
    Failed { kind: TriggerKind, reason: String },
}

#[derive(Clone, Debug)]
pub enum CounterEvents {
    /// New entries landed in the journal; aggregate reads should refetch.
    JournalUpdated { appended: usize, total: usize },
    /// The aggregate snapshot was refreshed from chain state.
    SnapshotRefreshed,
}
