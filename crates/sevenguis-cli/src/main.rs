//! Sevenguis CLI - cell sheet evaluation tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use sevenguis_core::{CellAddr, CellError, CellOutcome, ComputedSheet, GridSpec, RawSheet};
use sevenguis_formula::{compute, recompute};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sevenguis")]
#[command(
    author,
    version,
    about = "Evaluate cell-sheet snapshots from the 7GUIs showcase"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every populated cell and print address/value lines
    Eval {
        /// Sheet snapshot: a JSON object of address to raw text
        input: PathBuf,
    },

    /// Evaluate a single cell
    Get {
        /// Sheet snapshot: a JSON object of address to raw text
        input: PathBuf,

        /// Cell address to resolve (e.g. C1)
        cell: String,
    },

    /// Render the A-J x 1-9 grid as a table
    Grid {
        /// Sheet snapshot: a JSON object of address to raw text
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { input } => eval(&input),
        Commands::Get { input, cell } => get(&input, &cell),
        Commands::Grid { input } => grid(&input),
    }
}

/// Load a raw sheet from a JSON snapshot file.
///
/// Keys that are not valid address tokens are a load error; evaluation
/// problems are per-cell and never fail the process.
fn load_sheet(path: &Path) -> Result<RawSheet> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let sheet: RawSheet = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse sheet '{}'", path.display()))?;
    debug!("loaded {} cells from '{}'", sheet.len(), path.display());
    Ok(sheet)
}

fn eval(input: &Path) -> Result<()> {
    let raw = load_sheet(input)?;
    let pass = recompute(&raw, &ComputedSheet::new());

    let mut addrs: Vec<CellAddr> = pass.computed.iter().map(|(a, _)| a.clone()).collect();
    addrs.sort();

    for addr in addrs {
        println!("{}\t{}", addr, pass.computed.display(&addr));
    }
    Ok(())
}

fn get(input: &Path, cell: &str) -> Result<()> {
    let raw = load_sheet(input)?;
    let addr = CellAddr::parse(cell).with_context(|| format!("Invalid cell '{cell}'"))?;

    match compute(&addr, &raw) {
        // Same marker the recompute pass would store for a NaN result
        Ok(Some(n)) if n.is_nan() => println!("{}", CellError::Nan),
        Ok(Some(n)) => println!("{}", CellOutcome::Number(n)),
        Ok(None) => println!(),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn grid(input: &Path) -> Result<()> {
    let raw = load_sheet(input)?;
    let pass = recompute(&raw, &ComputedSheet::new());

    print!("{}", render_grid(&GridSpec::default(), &pass.computed));
    Ok(())
}

/// Render a computed sheet as an aligned text table with a column-letter
/// header and row numbers down the side.
fn render_grid(grid: &GridSpec, computed: &ComputedSheet) -> String {
    let cols = grid.col_count() as usize;

    // Row-major display texts for the whole block
    let cells: Vec<String> = grid.addresses().map(|a| computed.display(&a)).collect();

    // Column width: widest cell text in the column, at least the header
    let mut widths = vec![1usize; cols];
    for (i, text) in cells.iter().enumerate() {
        let col = i % cols;
        widths[col] = widths[col].max(text.len());
    }

    let mut out = String::new();

    out.push_str("  ");
    for (letter, width) in grid.columns().zip(&widths) {
        out.push_str(&format!(" {letter:>width$}", width = *width));
    }
    out.push('\n');

    for (r, row) in grid.rows().enumerate() {
        out.push_str(&format!("{row:>2}"));
        for col in 0..cols {
            let text = &cells[r * cols + col];
            out.push_str(&format!(" {text:>width$}", width = widths[col]));
        }
        out.push('\n');
    }

    out
}
