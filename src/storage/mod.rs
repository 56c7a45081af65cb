mod memory_storage;

use crate::models::{BatchTransfer, Transaction};
use crate::types::EntryId;

pub use memory_storage::MemoryStore;

/// Append-only destination for accepted batches.
///
/// Identifiers are assigned here and nowhere else; the pipeline only hands over
/// finished values.
pub trait TransferStore: Send + Sync + 'static {
    fn add_transactions(&self, transactions: Vec<Transaction>) -> Vec<EntryId>;
    fn add_batch_transfer(&self, batch_transfer: BatchTransfer) -> EntryId;
    fn transactions(&self) -> Vec<Transaction>;
    fn batch_transfers(&self) -> Vec<BatchTransfer>;
}
