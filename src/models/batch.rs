use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::errors::AggregationError;
use crate::models::Transaction;

/// Aggregate over one submitted set of transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTransfer {
    /// Operator supplied label.
    pub name: String,
    /// Identity selected to approve the batch.
    pub approver: String,
    pub transactions: Vec<Transaction>,
    pub total_amount: Decimal,
    pub number_of_payments: usize,
    /// `None` when the batch carries no payments.
    pub average_payment_value: Option<Decimal>
}

impl BatchTransfer {
    /// Computes the batch statistics over already validated transactions.
    ///
    /// # Errors
    /// Returns `AggregationError::Overflow` if the total or the average cannot be
    /// represented as a `Decimal`.
    pub fn aggregate(transactions: Vec<Transaction>, name: &str, approver: &str) -> Result<Self, AggregationError> {
        let total_amount = transactions.iter()
            .try_fold(Decimal::ZERO, |total, transaction| total.checked_add(transaction.amount.value()))
            .ok_or(AggregationError::Overflow)?;

        let number_of_payments = transactions.len();

        let average_payment_value = if number_of_payments == 0 {
            None
        } else {
            let count = Decimal::from(number_of_payments as u64);
            Some(total_amount.checked_div(count).ok_or(AggregationError::Overflow)?)
        };

        Ok(Self {
            name: name.to_string(),
            approver: approver.to_string(),
            transactions,
            total_amount,
            number_of_payments,
            average_payment_value
        })
    }
}
