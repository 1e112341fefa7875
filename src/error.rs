//! Error types for the Game of Life engine

use std::io;

/// Errors produced by grid construction, parsing and persistence
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A grid was requested with a zero row or column count
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Snapshot text could not be parsed
    #[error("malformed snapshot: {0}")]
    MalformedInput(String),

    /// A cell write fell outside the grid
    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    InvalidCoordinates {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Underlying filesystem error, passed through untouched
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, LifeError>;
