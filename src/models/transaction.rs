use chrono::NaiveDate;
use serde::Serialize;

use crate::models::TransactionStatus;
use crate::types::{AccountNumber, Amount};

/// A transfer record that passed every field rule.
///
/// Transactions are only built by the record normalizer and always start out
/// as `pending` without an error message; later status changes belong to
/// whoever owns the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Calendar date of the transfer, rendered as `YYYY-MM-DD`.
    pub transaction_date: NaiveDate,
    pub account_number: AccountNumber,
    /// Trimmed, never empty.
    pub account_holder_name: String,
    pub amount: Amount,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>
}

impl Transaction {
    pub fn pending(transaction_date: NaiveDate, account_number: AccountNumber, account_holder_name: String, amount: Amount) -> Self {
        Self {
            transaction_date,
            account_number,
            account_holder_name,
            amount,
            status: TransactionStatus::Pending,
            error_message: None
        }
    }
}
