pub use chain::ChainTag;
pub use journal::{CounterJournal, JournalEntry};
pub use snapshot::{CounterSnapshot, LastIncrementer};
pub use trigger::{TriggerKind, TriggerState, TriggerStatus};
pub use wallet::WalletSession;

mod chain;
mod journal;
mod snapshot;
mod trigger;
mod wallet;
