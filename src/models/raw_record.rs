use csv::StringRecord;

use crate::models::Transaction;
use crate::types::DATE_FORMAT;

/// One data row of the uploaded table, reduced to the required columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub transaction_date: String,
    pub account_number: String,
    pub account_holder_name: String,
    pub amount: String
}

impl From<&Transaction> for RawRecord {
    /// Renders a normalized transaction back into its canonical source row.
    fn from(transaction: &Transaction) -> Self {
        Self {
            transaction_date: transaction.transaction_date.format(DATE_FORMAT).to_string(),
            account_number: transaction.account_number.to_string(),
            account_holder_name: transaction.account_holder_name.clone(),
            amount: transaction.amount.to_string()
        }
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub transaction_date: usize,
    pub account_number: usize,
    pub account_holder_name: usize,
    pub amount: usize
}

impl ColumnIndex {
    /// Picks the required cells out of `row`. Cells past the end of a short row read as empty.
    pub fn adapt(&self, row: &StringRecord) -> RawRecord {
        let cell = |index: usize| row.get(index).unwrap_or_default().to_string();

        RawRecord {
            transaction_date: cell(self.transaction_date),
            account_number: cell(self.account_number),
            account_holder_name: cell(self.account_holder_name),
            amount: cell(self.amount)
        }
    }
}
