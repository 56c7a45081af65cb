use crate::types::errors::DateError;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a transaction date in the exact `YYYY-MM-DD` layout.
///
/// chrono alone accepts unpadded months and days (`2024-3-7`) and signed or
/// five digit years, so the textual layout is checked before the calendar one.
pub fn parse_transaction_date(value: &str) -> Result<NaiveDate, DateError> {
    let bytes = value.as_bytes();

    let layout_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit()
        });

    if !layout_ok {
        return Err(DateError::InvalidLayout(value.to_string()));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DateError::InvalidDate(value.to_string()))
}
