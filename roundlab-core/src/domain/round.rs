//! Round identifiers — monotonically increasing decimal integer text.
//!
//! Upstream round ids can exceed u64 range, so they are carried as digit
//! strings and compared as arbitrary-precision integers. They are never
//! parsed through floating point.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::DomainError;

/// A round identifier: decimal digits, compared numerically at any length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundId(String);

impl RoundId {
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidRoundId(text));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits with leading zeros stripped ("007" → "7", "000" → "0").
    fn canonical(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }

    /// The next round id: decimal increment, arbitrary precision.
    pub fn next(&self) -> RoundId {
        let mut digits: Vec<u8> = self.canonical().bytes().collect();
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
        RoundId(String::from_utf8(digits).expect("decimal digits are valid UTF-8"))
    }
}

impl Ord for RoundId {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.canonical();
        let b = other.canonical();
        // Longer digit string = larger integer; equal length falls back to
        // lexicographic, which matches numeric order for equal-length digits.
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl PartialOrd for RoundId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
