//! cellgrid CLI - demonstration driver for the cell grid

use anyhow::{Context, Result};
use cellgrid_core::{Cell, CellValue, CoerceError, Color, Grid};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, Write};

/// Sample cells as (row, col, text)
const SAMPLES: [(usize, usize, &str); 3] = [(0, 0, "Academy"), (0, 1, "123"), (2, 1, "3.14")];

type Coercion = fn(&mut Cell) -> std::result::Result<(), CoerceError>;

/// Sample cells that hold numbers, with the coercion applied to each
const COERCIONS: [(usize, usize, Coercion); 2] = [
    (0, 1, Cell::coerce_to_integer),
    (2, 1, Cell::coerce_to_float),
];

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(author, version, about = "Exercise an in-memory cell grid")]
struct Cli {
    /// Number of columns in the grid
    #[arg(long, default_value = "3", global = true)]
    columns: usize,

    /// Number of rows in the grid
    #[arg(long, default_value = "4", global = true)]
    rows: usize,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through setting, coercing, coloring, resetting and summing cells
    Demo {
        /// Keep the values instead of resetting before the final aggregates
        #[arg(long)]
        no_reset: bool,
    },

    /// Fill the demo grid and print it as delimited text
    Dump {
        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut grid = Grid::new(cli.columns, cli.rows);
    match cli.command.unwrap_or(Commands::Demo { no_reset: false }) {
        Commands::Demo { no_reset } => demo(&mut grid, no_reset),
        Commands::Dump { delimiter } => {
            populate(&mut grid)?;
            dump(&grid, delimiter)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Set the sample string values
fn fill(grid: &mut Grid) -> Result<()> {
    for (row, col, text) in SAMPLES {
        grid.set_value_at(row, col, text)
            .with_context(|| format!("Failed to set ({}, {})", row, col))?;
    }
    Ok(())
}

/// Coerce the sample values that hold numbers.
///
/// Returns each coerced position with the failure, if any. A failed
/// coercion leaves the cell as it was and is not an error here.
fn coerce(grid: &mut Grid) -> Result<Vec<(usize, usize, Option<CoerceError>)>> {
    COERCIONS
        .iter()
        .map(|&(row, col, apply)| -> Result<_> {
            let cell = grid
                .cell_at_mut(row, col)
                .with_context(|| format!("Failed to coerce ({}, {})", row, col))?;
            Ok((row, col, apply(cell).err()))
        })
        .collect()
}

fn populate(grid: &mut Grid) -> Result<()> {
    fill(grid)?;
    for (row, col, failure) in coerce(grid)? {
        if let Some(e) = failure {
            eprintln!("Warning: ({}, {}) left unconverted: {}", row, col, e);
        }
    }
    Ok(())
}

fn demo(grid: &mut Grid, no_reset: bool) -> Result<()> {
    println!(
        "Grid: {} rows x {} columns",
        grid.row_count(),
        grid.column_count()
    );

    fill(grid)?;
    for (row, col, _) in SAMPLES {
        println!("Value at ({}, {}): {}", row, col, grid.get_value_at(row, col)?);
    }

    for (row, col, failure) in coerce(grid)? {
        let cell = grid.cell_at(row, col)?;
        match failure {
            None => println!(
                "Converted value at ({}, {}): {} [{}]",
                row,
                col,
                cell.value(),
                cell.kind()
            ),
            Some(e) => println!(
                "Conversion at ({}, {}) failed: {} (kept {} [{}])",
                row,
                col,
                e,
                cell.value(),
                cell.kind()
            ),
        }
    }

    grid.set_color_at(0, 0, Color::Red)?;
    println!("Color at (0, 0): {}", grid.get_color_at(0, 0)?);

    println!("Sum of column 1: {}", grid.column_sum(1)?);

    if !no_reset {
        grid.reset();
        println!("Grid reset");
    }

    println!("Sum of column 1: {}", grid.column_sum(1)?);
    println!("Average of row 2: {}", grid.row_average(2)?);

    Ok(())
}

fn dump(grid: &Grid, delimiter: char) -> Result<()> {
    let mut output = String::new();

    for row in 0..grid.row_count() {
        let line: Vec<String> = grid
            .row(row)?
            .iter()
            .map(|cell| cell_value_to_field(cell.value(), delimiter))
            .collect();
        output.push_str(&line.join(&delimiter.to_string()));
        output.push('\n');
    }

    io::stdout()
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;

    Ok(())
}

/// Convert a CellValue to a delimiter-safe field
fn cell_value_to_field(value: &CellValue, delimiter: char) -> String {
    let text = value.to_string();

    // Quote if necessary
    if text.contains(delimiter) || text.contains('"') || text.contains('\n') || text.contains('\r')
    {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}
