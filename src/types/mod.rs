mod account_number;
mod amount;
mod date;
mod errors;

pub use account_number::AccountNumber;
pub use amount::Amount;
pub use date::{parse_transaction_date, DATE_FORMAT};
pub use errors::{AccountNumberError, AmountError, DateError};

/// 1-based position of a data row in the parsed input; `0` addresses the whole file.
pub type RowIndex = u64;
pub type EntryId = u64;
