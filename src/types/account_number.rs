use crate::types::errors::AccountNumberError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

/// Destination account in the fixed `000-#########-##` layout.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn account_number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    //NOTE: `\d` would also admit non-ASCII digits, the layout only allows 0-9
    PATTERN.get_or_init(|| Regex::new(r"^000-[0-9]{9}-[0-9]{2}$").expect("invalid account number regex"))
}

impl FromStr for AccountNumber {
    type Err = AccountNumberError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !account_number_pattern().is_match(value) {
            return Err(AccountNumberError::InvalidPattern(value.to_string()));
        }

        Ok(AccountNumber(value.to_string()))
    }
}

impl Display for AccountNumber {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
