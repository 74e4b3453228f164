//! Cell evaluation
//!
//! [`compute`] resolves one address against a raw sheet: plain numeric text
//! passes through, a reference chases the referenced cell, and a formula
//! resolves both operands before applying its operator. A visited set is
//! shared across the whole top-level call, so any revisit of a cell during
//! resolution reports a cycle. Resolution depth is capped so a pathological
//! chain fails with a marker instead of exhausting the stack.

use crate::parser::scan_formula;
use ahash::AHashSet;
use sevenguis_core::{CellAddr, CellError, RawSheet};

/// Maximum reference-chain depth before evaluation gives up.
///
/// The reference grid holds 90 cells, so any chain it can express stays
/// well under this cap.
pub const MAX_DEPTH: usize = 128;

/// Resolve one cell against `sheet`.
///
/// `Ok(None)` is the "no value" result: the cell is empty or absent, or
/// heads a chain of plain references ending in an empty cell. Failures are
/// per-cell and carry the marker shown in the cell's place.
///
/// Evaluation is a pure function of `sheet`; every top-level call starts
/// with a fresh visited set.
///
/// # Examples
/// ```
/// use sevenguis_core::{CellAddr, RawSheet};
/// use sevenguis_formula::compute;
///
/// let mut sheet = RawSheet::new();
/// sheet.set(CellAddr::parse("A1")?, "2");
/// sheet.set(CellAddr::parse("B1")?, "3");
/// sheet.set(CellAddr::parse("C1")?, "=A1+B1");
///
/// let c1 = CellAddr::parse("C1")?;
/// assert_eq!(compute(&c1, &sheet), Ok(Some(5.0)));
/// # Ok::<(), sevenguis_core::Error>(())
/// ```
pub fn compute(addr: &CellAddr, sheet: &RawSheet) -> Result<Option<f64>, CellError> {
    let mut visited = AHashSet::new();
    compute_cell(addr, sheet, &mut visited, 0)
}

fn compute_cell(
    addr: &CellAddr,
    sheet: &RawSheet,
    visited: &mut AHashSet<CellAddr>,
    depth: usize,
) -> Result<Option<f64>, CellError> {
    if depth > MAX_DEPTH {
        return Err(CellError::Depth);
    }

    // Visited entries are never removed within one top-level call:
    // cross-references are cycle-checked globally, not just along the
    // direct chain.
    visited.insert(addr.clone());

    let raw = match sheet.get(addr) {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(None),
    };

    if let Some(body) = raw.strip_prefix('=') {
        let formula = scan_formula(body)?;

        let left = operand_value(formula.left, sheet, visited, depth)?;
        let right = operand_value(formula.right, sheet, visited, depth)?;

        // A resolved operand can still be NaN (e.g. a referenced formula
        // over infinities); name the operand that went bad.
        if left.is_nan() {
            return Err(CellError::BadOperand(formula.left.to_string()));
        }
        if right.is_nan() {
            return Err(CellError::BadOperand(formula.right.to_string()));
        }

        formula.op.apply(left, right).map(Some)
    } else {
        resolve_token(raw, sheet, visited, depth)
    }
}

/// Resolve a single operand token: reference check first, numeric literal
/// otherwise.
///
/// The reference check requires a leading column letter, so a pure-digit
/// token always reads as a literal. A token that merely starts like an
/// address but is not a fully valid one resolves like a reference to an
/// absent cell.
fn resolve_token(
    token: &str,
    sheet: &RawSheet,
    visited: &mut AHashSet<CellAddr>,
    depth: usize,
) -> Result<Option<f64>, CellError> {
    if CellAddr::is_ref_like(token) {
        let Ok(target) = CellAddr::parse(token) else {
            return Ok(None);
        };
        if visited.contains(&target) {
            return Err(CellError::Cyclic);
        }
        compute_cell(&target, sheet, visited, depth + 1)
    } else {
        let value: f64 = token.trim().parse().map_err(|_| CellError::Nan)?;
        if value.is_nan() {
            return Err(CellError::Nan);
        }
        Ok(Some(value))
    }
}

/// An operand inside a formula must produce a number; an empty cell is not
/// a valid operand value.
fn operand_value(
    token: &str,
    sheet: &RawSheet,
    visited: &mut AHashSet<CellAddr>,
    depth: usize,
) -> Result<f64, CellError> {
    resolve_token(token, sheet, visited, depth)?.ok_or(CellError::Nan)
}
