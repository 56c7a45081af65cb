use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: value is an empty string")]
    Empty,
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: value must be greater than zero")]
    NotPositive
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountNumberError {
    #[error("Account number error: [{0}] does not match 000-000000000-00")]
    InvalidPattern(String)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Date error: [{0}] is not laid out as YYYY-MM-DD")]
    InvalidLayout(String),
    #[error("Date error: [{0}] is not a calendar date")]
    InvalidDate(String)
}
