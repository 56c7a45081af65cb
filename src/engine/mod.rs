mod batch_engine;
mod errors;
mod table;

use crate::models::{BatchTransfer, Transaction, ValidationError};

pub use batch_engine::BatchEngine;
pub use errors::IngestError;
pub use table::{read_table, RawTable};

/// Result of validating one uploaded table.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// Every row passed, in input order.
    Accepted(Vec<Transaction>),
    /// At least one problem was found; nothing from the table is kept.
    Rejected(Vec<ValidationError>)
}

/// Result of a full upload-to-store run.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Accepted(BatchTransfer),
    Rejected(Vec<ValidationError>)
}
