mod batch;
mod errors;
mod raw_record;
mod request;
mod transaction;

use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

pub use batch::BatchTransfer;
pub use errors::{AggregationError, ErrorField, SubmissionError, ValidationError};
pub use raw_record::{ColumnIndex, RawRecord};
pub use request::BatchRequest;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Settled,
    Failed
}

impl Display for TransactionStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let status = match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Settled => "settled",
            TransactionStatus::Failed => "failed"
        };

        formatter.write_str(status)
    }
}
