use std::cmp::Reverse;

use alloy_primitives::{Address, TxHash, U256};
use chrono::{DateTime, Utc};

/// One decoded `CounterIncremented` observation. Immutable once appended,
/// keyed by transaction hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalEntry {
    pub sender_chain_id: U256,
    pub sender: Address,
    pub new_value: U256,
    pub transaction_hash: TxHash,
    pub block_number: u64,
    pub seen_at: DateTime<Utc>,
}

/// Append-only record of destination-chain counter events for the lifetime
/// of the process. Arrival order is kept as-is; display order is a derived
/// view recomputed on demand.
#[derive(Clone, Debug, Default)]
pub struct CounterJournal {
    entries: Vec<JournalEntry>,
}

impl CounterJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, batch: impl IntoIterator<Item = JournalEntry>) {
        self.entries.extend(batch);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Entries ordered by descending block number. The sort is stable, so
    /// entries from the same block keep their arrival order.
    pub fn sorted_view(&self) -> Vec<JournalEntry> {
        let mut view = self.entries.clone();
        view.sort_by_key(|entry| Reverse(entry.block_number));
        view
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(block_number: u64, tx_byte: u8, new_value: u64) -> JournalEntry {
        JournalEntry {
            sender_chain_id: U256::from(420120000u64),
            sender: Address::repeat_byte(0xaa),
            new_value: U256::from(new_value),
            transaction_hash: TxHash::repeat_byte(tx_byte),
            block_number,
            seen_at: Utc::now(),
        }
    }

    #[test]
    fn sorted_view_is_descending_by_block() {
        let mut journal = CounterJournal::new();
        journal.extend([entry(5, 0x01, 1), entry(9, 0x02, 2), entry(7, 0x03, 3)]);

        let view = journal.sorted_view();
        let blocks: Vec<u64> = view.iter().map(|e| e.block_number).collect();
        assert_eq!(blocks, vec![9, 7, 5]);
    }

    #[test]
    fn equal_blocks_keep_arrival_order() {
        let mut journal = CounterJournal::new();
        journal.append(entry(4, 0x01, 1));
        journal.append(entry(8, 0x02, 2));
        journal.append(entry(8, 0x03, 3));
        journal.append(entry(8, 0x04, 4));
        journal.append(entry(2, 0x05, 5));

        let view = journal.sorted_view();
        let hashes: Vec<TxHash> = view.iter().map(|e| e.transaction_hash).collect();
        assert_eq!(
            hashes,
            vec![
                TxHash::repeat_byte(0x02),
                TxHash::repeat_byte(0x03),
                TxHash::repeat_byte(0x04),
                TxHash::repeat_byte(0x01),
                TxHash::repeat_byte(0x05),
            ]
        );
    }

    #[test]
    fn batches_accumulate_without_loss() {
        let mut journal = CounterJournal::new();
        journal.extend((0..10u8).map(|i| entry(i as u64, i, i as u64)));
        journal.extend((10..25u8).map(|i| entry(i as u64, i, i as u64)));
        journal.extend(std::iter::empty());

        assert_eq!(journal.len(), 25);
        assert_eq!(journal.sorted_view().len(), 25);
    }

    #[test]
    fn view_does_not_mutate_the_journal() {
        let mut journal = CounterJournal::new();
        journal.append(entry(3, 0x01, 1));
        journal.append(entry(1, 0x02, 2));

        let _ = journal.sorted_view();
        let arrival: Vec<u64> = journal.entries().iter().map(|e| e.block_number).collect();
        assert_eq!(arrival, vec![3, 1]);
    }
}
