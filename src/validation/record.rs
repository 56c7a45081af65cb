use std::str::FromStr;

use tracing::trace;

use crate::models::{RawRecord, Transaction, ValidationError};
use crate::types::{parse_transaction_date, AccountNumber, Amount, RowIndex};

/// Applies every field rule to `record` and builds the pending transaction.
///
/// All four rules always run, so a row reports every broken field at once rather
/// than only the first one.
///
/// # Errors
/// Returns between one and four `ValidationError`s tagged with `row` when any
/// field fails its rule.
pub fn normalize_record(record: &RawRecord, row: RowIndex) -> Result<Transaction, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let transaction_date = match parse_transaction_date(&record.transaction_date) {
        Ok(date) => Some(date),
        Err(error) => {
            trace!("Row [{row}] rejected: {error}");
            errors.push(ValidationError::transaction_date(row));
            None
        }
    };

    let account_number = match AccountNumber::from_str(&record.account_number) {
        Ok(account_number) => Some(account_number),
        Err(error) => {
            trace!("Row [{row}] rejected: {error}");
            errors.push(ValidationError::account_number(row));
            None
        }
    };

    let account_holder_name = record.account_holder_name.trim();

    if account_holder_name.is_empty() {
        trace!("Row [{row}] rejected: account holder name is blank");
        errors.push(ValidationError::account_holder_name(row));
    }

    let amount = match Amount::from_str(&record.amount) {
        Ok(amount) => Some(amount),
        Err(error) => {
            trace!("Row [{row}] rejected: {error}");
            errors.push(ValidationError::amount(row));
            None
        }
    };

    match (transaction_date, account_number, amount) {
        (Some(transaction_date), Some(account_number), Some(amount)) if errors.is_empty() => {
            Ok(Transaction::pending(transaction_date, account_number, account_holder_name.to_string(), amount))
        }
        _ => Err(errors)
    }
}

/// Reports the field rule violations of `record` without building a transaction.
pub fn validate_record(record: &RawRecord, row: RowIndex) -> Vec<ValidationError> {
    normalize_record(record, row).err().unwrap_or_default()
}
