//! Error handling for ICARTT processing operations.
//!
//! Structural problems (malformed first line, data table parse failures,
//! unwritable export destinations) surface as distinct error variants.
//! Header heuristics degrade to partial results and never appear here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IcarttError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid ICARTT format in file: {path} - {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("Data table parsing failed for file: {path} - {reason}")]
    TableParsingFailed { path: PathBuf, reason: String },

    #[error("Export failed for destination: {path} - {reason}")]
    ExportFailed { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, IcarttError>;
