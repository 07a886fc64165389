use std::{fmt, str::FromStr};
use thiserror::Error;

/// Number of digits of a Brazilian postal code (CEP).
pub const POSTAL_CODE_LEN: usize = 8;

/// A normalized postal code that consists of exactly 8 digits.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid postal code: expected {POSTAL_CODE_LEN} digits, found {digits}")]
pub struct PostalCodeParseError {
    pub digits: usize,
}

impl FromStr for PostalCode {
    type Err = PostalCodeParseError;

    /// Strips all formatting characters (e.g. `01001-000`) and
    /// accepts the remaining digits if there are exactly 8 of them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != POSTAL_CODE_LEN {
            return Err(PostalCodeParseError {
                digits: digits.len(),
            });
        }
        Ok(Self(digits))
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
