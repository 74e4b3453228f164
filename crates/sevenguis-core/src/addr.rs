//! Cell address tokens
//!
//! An address is `<column letters A-J><row digits>` (e.g. `A1`, `J9`). The
//! token is kept exactly as entered: addresses are case-sensitive and `A01`
//! is a different key than `A1`, matching the string-keyed sheets the engine
//! is driven by.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// First valid column letter.
pub const MIN_COL: char = 'A';

/// Last valid column letter.
pub const MAX_COL: char = 'J';

/// A validated cell address token (e.g. `A1`, `J9`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddr(Box<str>);

impl CellAddr {
    /// Parse an address token.
    ///
    /// The token must be one or more column letters in `A..=J` followed by
    /// one or more ASCII digits, with nothing before or after.
    ///
    /// # Examples
    /// ```
    /// use sevenguis_core::CellAddr;
    ///
    /// let addr = CellAddr::parse("A1").unwrap();
    /// assert_eq!(addr.as_str(), "A1");
    ///
    /// assert!(CellAddr::parse("K1").is_err());
    /// assert!(CellAddr::parse("a1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let letters = s.chars().take_while(|c| (MIN_COL..=MAX_COL).contains(c)).count();
        if letters == 0 {
            return Err(Error::InvalidAddress(format!("no column letters in '{s}'")));
        }

        // Column letters are ASCII, so `letters` is also a byte offset.
        let digits = &s[letters..];
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row digits in '{s}'")));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!("trailing garbage in '{s}'")));
        }

        Ok(Self(s.into()))
    }

    /// Build an address from a single column letter and a row number.
    pub fn new(col: char, row: u32) -> Result<Self> {
        if !(MIN_COL..=MAX_COL).contains(&col) {
            return Err(Error::InvalidAddress(format!("column '{col}' not in A-J")));
        }
        Ok(Self::from_valid(col, row))
    }

    /// Infallible constructor for callers that already validated the column.
    pub(crate) fn from_valid(col: char, row: u32) -> Self {
        debug_assert!((MIN_COL..=MAX_COL).contains(&col));
        Self(format!("{col}{row}").into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `s` starts like a cell reference: one or more column letters
    /// in `A..=J` immediately followed by a digit.
    ///
    /// This is the dispatch test used when deciding whether a token names a
    /// cell or should scan as a numeric literal; a pure-digit token never
    /// counts as a reference.
    pub fn is_ref_like(s: &str) -> bool {
        let letters = s.chars().take_while(|c| (MIN_COL..=MAX_COL).contains(c)).count();
        letters > 0 && s[letters..].starts_with(|c: char| c.is_ascii_digit())
    }
}

impl fmt::Display for CellAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CellAddr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CellAddr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellAddr {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        CellAddr::parse(&s).map_err(serde::de::Error::custom)
    }
}
