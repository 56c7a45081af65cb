use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::types::RowIndex;

const SCHEMA_MESSAGE: &str = "Invalid CSV format. Please check the column headers.";

/// Field a validation error is attributed to. The record fields use the column header names.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorField {
    Format,
    TransactionDate,
    AccountNumber,
    AccountHolderName,
    Amount
}

impl ErrorField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorField::Format => "format",
            ErrorField::TransactionDate => "Transaction Date",
            ErrorField::AccountNumber => "Account Number",
            ErrorField::AccountHolderName => "Account Holder Name",
            ErrorField::Amount => "Amount"
        }
    }
}

impl Display for ErrorField {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Serialize for ErrorField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A row addressable rejection. Row `0` is reserved for whole file problems.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Error)]
#[error("Row {row}: {field} - {message}")]
pub struct ValidationError {
    pub row: RowIndex,
    pub field: ErrorField,
    pub message: String
}

impl ValidationError {
    pub fn new(row: RowIndex, field: ErrorField, message: impl Into<String>) -> Self {
        Self {
            row,
            field,
            message: message.into()
        }
    }

    pub fn schema() -> Self {
        Self::new(0, ErrorField::Format, SCHEMA_MESSAGE)
    }

    pub fn transaction_date(row: RowIndex) -> Self {
        Self::new(row, ErrorField::TransactionDate, "Invalid date format. Use YYYY-MM-DD")
    }

    pub fn account_number(row: RowIndex) -> Self {
        Self::new(row, ErrorField::AccountNumber, "Invalid account number format. Use 000-000000000-00")
    }

    pub fn account_holder_name(row: RowIndex) -> Self {
        Self::new(row, ErrorField::AccountHolderName, "Account holder name cannot be empty")
    }

    pub fn amount(row: RowIndex) -> Self {
        Self::new(row, ErrorField::Amount, "Amount must be a positive number")
    }

    pub fn is_schema_error(&self) -> bool {
        self.row == 0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Batch totals overflowed the supported decimal range")]
    Overflow
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Batch name is required")]
    NameRequired,
    #[error("Approver is required")]
    ApproverRequired,
    #[error("Approver '{approver}' is not in the approver list")]
    UnknownApprover {
        approver: String
    },
    #[error(transparent)]
    Aggregation(#[from] AggregationError)
}
