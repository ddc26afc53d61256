//! Error types for reading sensor dumps and writing fits.
//!
//! ┌ [`ParseError`]  : malformed raw temperature input
//! └ [`DriverError`] : run-level failures (I/O, empty input, parse)
//!
//! Numerical failures are not here: they stay per core as
//! [`crate::InterpolationError`] inside [`crate::cpu_temps::CoreFits`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: cannot read `{token}` as a temperature")]
    InvalidReading { line: usize, token: String },

    #[error("line {line}: expected {expected} readings, got {got}")]
    RaggedRow { line: usize, expected: usize, got: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to read {path}: {source}")]
    ReadInput { path: PathBuf, source: std::io::Error },

    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("no samples in {path}")]
    EmptySeries { path: PathBuf },

    #[error("failed to write {path}: {source}")]
    WriteOutput { path: PathBuf, source: std::io::Error },

    #[error("failed to serialize fits for core {core}: {source}")]
    Serialize { core: usize, source: serde_json::Error },
}
