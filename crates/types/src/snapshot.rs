use alloy_primitives::{Address, U256};
use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LastIncrementer {
    pub chain_id: U256,
    pub sender: Address,
}

/// Latest aggregate read of the destination-chain counter. Refreshed after
/// every journal update and on the periodic tick; `None` fields mean the
/// first fetch has not landed yet.
#[derive(Clone, Debug, Default)]
pub struct CounterSnapshot {
    pub number: Option<U256>,
    pub last_incrementer: Option<LastIncrementer>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl CounterSnapshot {
    pub fn record(&mut self, number: U256, last_incrementer: LastIncrementer) {
        self.number = Some(number);
        self.last_incrementer = Some(last_incrementer);
        self.fetched_at = Some(Utc::now());
    }
}
