use crate::models::{BatchTransfer, Transaction};
use crate::storage::TransferStore;
use crate::types::EntryId;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct MemoryStore {
    transactions: DashMap<EntryId, Transaction>,
    transaction_sequence: AtomicU64,
    batch_transfers: DashMap<EntryId, BatchTransfer>,
    batch_sequence: AtomicU64
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            transactions: DashMap::new(),
            transaction_sequence: AtomicU64::new(1),
            batch_transfers: DashMap::new(),
            batch_sequence: AtomicU64::new(1)
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn ordered_snapshot<T: Clone>(entries: &DashMap<EntryId, T>) -> Vec<T> {
    let mut snapshot: Vec<(EntryId, T)> = entries.iter()
        .map(|entry| (*entry.key(), entry.value().clone()))
        .collect();

    snapshot.sort_by_key(|(id, _)| *id);
    snapshot.into_iter().map(|(_, value)| value).collect()
}

impl TransferStore for MemoryStore {
    fn add_transactions(&self, transactions: Vec<Transaction>) -> Vec<EntryId> {
        //NOTE: A batch reserves one contiguous id range so concurrent appends never interleave its rows
        let first = self.transaction_sequence.fetch_add(transactions.len() as u64, Ordering::SeqCst);

        transactions.into_iter().zip(first..)
            .map(|(transaction, id)| {
                self.transactions.insert(id, transaction);
                id
            })
            .collect()
    }

    fn add_batch_transfer(&self, batch_transfer: BatchTransfer) -> EntryId {
        let id = self.batch_sequence.fetch_add(1, Ordering::SeqCst);
        self.batch_transfers.insert(id, batch_transfer);
        id
    }

    fn transactions(&self) -> Vec<Transaction> {
        ordered_snapshot(&self.transactions)
    }

    fn batch_transfers(&self) -> Vec<BatchTransfer> {
        ordered_snapshot(&self.batch_transfers)
    }
}
