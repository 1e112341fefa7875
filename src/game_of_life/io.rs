//! Snapshot text format for Game of Life grids
//!
//! One line per row, `'1'` for alive and `'0'` for dead, no delimiters and no
//! header. Blank lines are skipped when reading and never written.

use super::Grid;
use crate::error::{LifeError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Built-in patterns written by [`create_example_grids`]
pub const EXAMPLE_PATTERNS: &[(&str, &str)] = &[
    (
        "glider",
        "00100000\n10100000\n01100000\n00000000\n00000000\n00000000\n00000000\n00000000\n",
    ),
    ("blinker", "00000\n00000\n01110\n00000\n00000\n"),
    ("block", "0000\n0110\n0110\n0000\n"),
    ("beacon", "110000\n110000\n001100\n001100\n000000\n000000\n"),
];

/// Load a grid from a snapshot file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)?;
    let grid = parse_grid_from_string(&content)?;
    info!(
        path = %path.as_ref().display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "loaded snapshot"
    );
    Ok(grid)
}

/// Parse a grid from snapshot text
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return Err(LifeError::MalformedInput(
            "snapshot contains no grid rows".to_string(),
        ));
    };
    let cols = first.chars().count();

    let mut cells = Vec::with_capacity(lines.len());
    for (row_idx, line) in lines.iter().enumerate() {
        let row = line
            .chars()
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(LifeError::MalformedInput(format!(
                    "invalid character '{}' at row {}, column {}; only '0' and '1' are allowed",
                    ch, row_idx, col_idx
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;

        if row.len() != cols {
            return Err(LifeError::MalformedInput(format!(
                "row {} has length {}, expected {} (all rows must have the same length)",
                row_idx,
                row.len(),
                cols
            )));
        }
        cells.push(row);
    }

    debug!(rows = cells.len(), cols, "parsed snapshot");
    Grid::from_cells(cells)
}

/// Save a grid to a snapshot file, creating parent directories as needed
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&path, grid_to_string(grid))?;
    info!(path = %path.as_ref().display(), "saved snapshot");
    Ok(())
}

/// Convert a grid to snapshot text
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.cols() + 1));

    for row in grid.cells().chunks(grid.cols()) {
        result.extend(row.iter().map(|&alive| if alive { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

/// Write the built-in example patterns as `<name>.txt` into `output_dir`
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)?;

    for (name, content) in EXAMPLE_PATTERNS {
        std::fs::write(dir.join(format!("{}.txt", name)), content)?;
    }

    Ok(())
}
