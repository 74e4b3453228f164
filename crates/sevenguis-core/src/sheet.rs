//! Sheet containers and per-cell outcomes
//!
//! A [`RawSheet`] holds the text entered per address; a [`ComputedSheet`]
//! holds what evaluation produced for each of those addresses.

use crate::addr::CellAddr;
use ahash::AHashMap;
use std::fmt;
use thiserror::Error;

/// Per-cell evaluation failures, displayed as the cell's marker text.
///
/// These are deterministic parse/semantic errors, reported per cell; they
/// never abort evaluation of the rest of the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    /// A reference chain revisited a cell already being resolved
    #[error("!CYCLIC")]
    Cyclic,

    /// A token was neither a reference nor a parseable number
    #[error("!NaN")]
    Nan,

    /// Formula text does not match the `<operand><op><operand>` shape
    #[error("!FORMULA")]
    Formula,

    /// A named operand resolved to a non-numeric value
    #[error("!BAD_{0}")]
    BadOperand(String),

    /// Division with a right operand of exactly zero
    #[error("!DIV_BY_0")]
    DivByZero,

    /// A reference chain exceeded the evaluation depth cap
    #[error("!DEPTH")]
    Depth,
}

/// What evaluating one cell produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CellOutcome {
    /// A numeric value
    Number(f64),
    /// The cell (or the reference chain it heads) has no value
    Empty,
    /// Evaluation failed; the marker is shown in the cell's place
    Error(CellError),
}

impl CellOutcome {
    /// The numeric value, if there is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellOutcome::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this outcome is an error marker.
    pub fn is_error(&self) -> bool {
        matches!(self, CellOutcome::Error(_))
    }
}

impl fmt::Display for CellOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // No trailing decimals for integral values
            CellOutcome::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            CellOutcome::Empty => Ok(()),
            CellOutcome::Error(e) => write!(f, "{e}"),
        }
    }
}

/// Raw text per address, the evaluator's input.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawSheet {
    cells: AHashMap<CellAddr, String>,
}

impl RawSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the text entered at `addr`.
    pub fn set(&mut self, addr: CellAddr, text: impl Into<String>) {
        self.cells.insert(addr, text.into());
    }

    /// The raw text at `addr`, if any was entered.
    pub fn get(&self, addr: &CellAddr) -> Option<&str> {
        self.cells.get(addr).map(String::as_str)
    }

    /// Clear the entry at `addr`.
    pub fn remove(&mut self, addr: &CellAddr) -> Option<String> {
        self.cells.remove(addr)
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&CellAddr, &str)> {
        self.cells.iter().map(|(a, t)| (a, t.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the sheet has no entries.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(CellAddr, String)> for RawSheet {
    fn from_iter<I: IntoIterator<Item = (CellAddr, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Computed value per address, the evaluator's output.
///
/// Comparable for equality so a recomputation pass can decide whether
/// anything actually changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedSheet {
    cells: AHashMap<CellAddr, CellOutcome>,
}

impl ComputedSheet {
    /// Create an empty computed sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the outcome for `addr`.
    pub fn insert(&mut self, addr: CellAddr, outcome: CellOutcome) {
        self.cells.insert(addr, outcome);
    }

    /// The outcome for `addr`, if it was computed.
    pub fn get(&self, addr: &CellAddr) -> Option<&CellOutcome> {
        self.cells.get(addr)
    }

    /// Display text for `addr`: the outcome's text, or empty if absent.
    pub fn display(&self, addr: &CellAddr) -> String {
        self.get(addr).map(ToString::to_string).unwrap_or_default()
    }

    /// Iterate over all outcomes.
    pub fn iter(&self) -> impl Iterator<Item = (&CellAddr, &CellOutcome)> {
        self.cells.iter()
    }

    /// Number of computed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing was computed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outcome_display() {
        assert_eq!(CellOutcome::Number(5.0).to_string(), "5");
        assert_eq!(CellOutcome::Number(2.5).to_string(), "2.5");
        assert_eq!(CellOutcome::Number(-3.0).to_string(), "-3");
        assert_eq!(CellOutcome::Empty.to_string(), "");
        assert_eq!(CellOutcome::Error(CellError::Cyclic).to_string(), "!CYCLIC");
        assert_eq!(CellOutcome::Error(CellError::Nan).to_string(), "!NaN");
        assert_eq!(CellOutcome::Error(CellError::Formula).to_string(), "!FORMULA");
        assert_eq!(CellOutcome::Error(CellError::DivByZero).to_string(), "!DIV_BY_0");
        assert_eq!(
            CellOutcome::Error(CellError::BadOperand("B2".into())).to_string(),
            "!BAD_B2"
        );
    }

    #[test]
    fn test_raw_sheet_roundtrip() {
        let a1 = CellAddr::parse("A1").unwrap();
        let mut raw = RawSheet::new();
        assert!(raw.is_empty());

        raw.set(a1.clone(), "5");
        assert_eq!(raw.get(&a1), Some("5"));
        assert_eq!(raw.len(), 1);

        raw.set(a1.clone(), "=B1+1");
        assert_eq!(raw.get(&a1), Some("=B1+1"));

        assert_eq!(raw.remove(&a1), Some("=B1+1".to_string()));
        assert!(raw.get(&a1).is_none());
    }

    #[test]
    fn test_computed_sheet_equality() {
        let a1 = CellAddr::parse("A1").unwrap();
        let mut first = ComputedSheet::new();
        let mut second = ComputedSheet::new();
        assert_eq!(first, second);

        first.insert(a1.clone(), CellOutcome::Number(1.0));
        assert_ne!(first, second);

        second.insert(a1.clone(), CellOutcome::Number(1.0));
        assert_eq!(first, second);

        second.insert(a1, CellOutcome::Error(CellError::Nan));
        assert_ne!(first, second);
    }

    #[test]
    fn test_computed_sheet_display() {
        let a1 = CellAddr::parse("A1").unwrap();
        let b1 = CellAddr::parse("B1").unwrap();
        let mut computed = ComputedSheet::new();
        computed.insert(a1.clone(), CellOutcome::Number(8.0));

        assert_eq!(computed.display(&a1), "8");
        assert_eq!(computed.display(&b1), "");
    }
}
