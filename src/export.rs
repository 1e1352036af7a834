//! Export of extracted ICARTT tables to CSV and Parquet.
//!
//! CSV output writes column names as the first row with no index column.
//! Parquet output uses Snappy compression for fast decompression in
//! downstream analysis tools.

use crate::error::{IcarttError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Write the table as row-delimited text with a header row.
pub fn write_csv(df: &mut DataFrame, destination: &Path) -> Result<()> {
    let file = create_destination(destination)?;

    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .map_err(|e| export_error(destination, e))?;

    info!(
        "Wrote {} rows to CSV: {}",
        df.height(),
        destination.display()
    );
    Ok(())
}

/// Write the table as Snappy-compressed Parquet.
pub fn write_parquet(df: &mut DataFrame, destination: &Path) -> Result<()> {
    let file = create_destination(destination)?;

    ParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .finish(df)
        .map_err(|e| export_error(destination, e))?;

    info!(
        "Wrote {} rows to Parquet: {}",
        df.height(),
        destination.display()
    );
    Ok(())
}

fn create_destination(destination: &Path) -> Result<File> {
    File::create(destination).map_err(|e| IcarttError::ExportFailed {
        path: destination.to_path_buf(),
        reason: e.to_string(),
    })
}

fn export_error(destination: &Path, source: PolarsError) -> IcarttError {
    IcarttError::ExportFailed {
        path: destination.to_path_buf(),
        reason: source.to_string(),
    }
}
