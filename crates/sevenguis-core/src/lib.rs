//! # sevenguis-core
//!
//! Core data structures for the sevenguis showcase.
//!
//! This crate provides the types shared by the formula engine and the task
//! models:
//! - [`CellAddr`] - validated cell address tokens (`A1` .. `J9` style)
//! - [`RawSheet`] and [`ComputedSheet`] - the evaluator's input and output
//! - [`CellOutcome`] and [`CellError`] - per-cell results and error markers
//! - [`GridSpec`] - the reference 10-column grid geometry
//!
//! ## Example
//!
//! ```rust
//! use sevenguis_core::{CellAddr, RawSheet};
//!
//! let mut sheet = RawSheet::new();
//! sheet.set(CellAddr::parse("A1")?, "5");
//! sheet.set(CellAddr::parse("B1")?, "=A1+3");
//! # Ok::<(), sevenguis_core::Error>(())
//! ```

pub mod addr;
pub mod error;
pub mod grid;
pub mod sheet;

// Re-exports for convenience
pub use addr::{CellAddr, MAX_COL, MIN_COL};
pub use error::{Error, Result};
pub use grid::GridSpec;
pub use sheet::{CellError, CellOutcome, ComputedSheet, RawSheet};
