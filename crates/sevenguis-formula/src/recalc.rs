//! Whole-sheet recomputation
//!
//! Recomputes every populated address independently, each with a fresh
//! visited set, and reports whether anything changed relative to the
//! previous computed sheet so callers can skip redundant downstream
//! refreshes. Per-cell failures land in the output as their marker; they
//! never abort the pass.

use crate::eval::compute;
use log::debug;
use sevenguis_core::{CellError, CellOutcome, ComputedSheet, RawSheet};

/// Result of one recomputation pass.
#[derive(Debug, Clone)]
pub struct Recalc {
    /// The freshly computed sheet
    pub computed: ComputedSheet,
    /// Whether it differs from the previous computed sheet
    pub changed: bool,
}

/// Recompute `raw` in full and compare against `prev`.
///
/// Every address present in `raw` gets an outcome; empty raw text yields
/// [`CellOutcome::Empty`] without touching the evaluator. Cells are
/// independent, so the order they are visited in cannot affect the result.
///
/// Outcomes never hold a NaN number: a formula that resolves to NaN (e.g.
/// subtracting infinities) lands as its `!NaN` marker, keeping computed
/// sheets comparable across passes.
pub fn recompute(raw: &RawSheet, prev: &ComputedSheet) -> Recalc {
    let mut computed = ComputedSheet::new();
    let mut errors = 0usize;

    for (addr, text) in raw.iter() {
        let outcome = if text.is_empty() {
            CellOutcome::Empty
        } else {
            match compute(addr, raw) {
                // NaN is unequal to itself and would wedge change detection
                Ok(Some(n)) if n.is_nan() => {
                    errors += 1;
                    CellOutcome::Error(CellError::Nan)
                }
                Ok(Some(n)) => CellOutcome::Number(n),
                Ok(None) => CellOutcome::Empty,
                Err(e) => {
                    errors += 1;
                    CellOutcome::Error(e)
                }
            }
        };
        computed.insert(addr.clone(), outcome);
    }

    let changed = computed != *prev;
    debug!(
        "recomputed {} cells ({} errors, changed: {})",
        computed.len(),
        errors,
        changed
    );

    Recalc { computed, changed }
}
