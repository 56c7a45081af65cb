use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A strictly positive currency amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }

        Ok(Amount(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::Empty);
        }

        //NOTE: rust_decimal skips `_` separators, so `1_0` would silently read as 10
        if value.contains('_') {
            return Err(AmountError::InvalidFormat(format!("[{value}] contains a digit separator")));
        }

        //NOTE: Spreadsheet exports occasionally write large values in exponent form (1e3), accept both layouts
        let parsed = Decimal::from_str(value)
            .or_else(|_| Decimal::from_scientific(value))
            .map_err(|error| AmountError::InvalidFormat(format!("[{value}] is not a decimal number: {error}")))?;

        Amount::new(parsed)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
