use crate::models::{ColumnIndex, ErrorField};

/// Columns every uploaded table must declare, in no particular order.
pub const REQUIRED_HEADERS: [ErrorField; 4] = [
    ErrorField::TransactionDate,
    ErrorField::AccountNumber,
    ErrorField::AccountHolderName,
    ErrorField::Amount
];

/// Returns `true` when every required column is present. Unknown columns are tolerated.
pub fn validate_schema<S: AsRef<str>>(headers: &[S]) -> bool {
    resolve_columns(headers).is_some()
}

/// Locates every required column, or `None` if any of them is missing.
///
/// Matching is exact and case sensitive. When a name repeats, its first column wins.
pub fn resolve_columns<S: AsRef<str>>(headers: &[S]) -> Option<ColumnIndex> {
    let position = |field: ErrorField| headers.iter().position(|header| header.as_ref() == field.as_str());

    Some(ColumnIndex {
        transaction_date: position(ErrorField::TransactionDate)?,
        account_number: position(ErrorField::AccountNumber)?,
        account_holder_name: position(ErrorField::AccountHolderName)?,
        amount: position(ErrorField::Amount)?
    })
}

/// Lists the required columns absent from `headers`, in declaration order.
pub fn missing_headers<S: AsRef<str>>(headers: &[S]) -> Vec<&'static str> {
    REQUIRED_HEADERS.iter()
        .map(ErrorField::as_str)
        .filter(|required| !headers.iter().any(|header| header.as_ref() == *required))
        .collect()
}
