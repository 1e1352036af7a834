//! Data table extraction for ICARTT files.
//!
//! The payload below the header boundary is ordinary comma-delimited text:
//! the column-name row sits at line `header_length` and data rows follow.
//! Everything above that boundary is opaque header text and is skipped
//! wholesale. Missing-value tokens are matched against raw cell text before
//! type inference so sentinels become nulls instead of polluting numeric
//! columns.

use crate::error::{IcarttError, Result};
use crate::models::{FormatInfo, TableOptions};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Parse the data payload into a DataFrame.
///
/// `missing_tokens` cells become nulls. Structural CSV failures surface as
/// errors; missing-value ambiguity never does.
pub fn read_table(
    info: &FormatInfo,
    missing_tokens: &[String],
    options: &TableOptions,
) -> Result<DataFrame> {
    let skip_rows = info.header_length.saturating_sub(1);

    debug!(
        "Reading table from {} (skip_rows={}, {} missing tokens)",
        info.path.display(),
        skip_rows,
        missing_tokens.len()
    );

    let null_tokens: Vec<PlSmallStr> = missing_tokens
        .iter()
        .map(|t| PlSmallStr::from_str(t))
        .collect();

    let parse_options = CsvParseOptions::default()
        .with_separator(b',')
        .with_encoding(CsvEncoding::LossyUtf8)
        .with_null_values(Some(NullValues::AllColumns(null_tokens)));

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(skip_rows)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(info.path.clone()))
        .map_err(|e| table_error(&info.path, e))?
        .finish()
        .map_err(|e| table_error(&info.path, e))?;

    if options.strip_colnames {
        let trimmed: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.as_str().trim().to_string())
            .collect();
        df.set_column_names(trimmed)
            .map_err(|e| table_error(&info.path, e))?;
    }

    debug!(
        "Extracted table: {} rows x {} columns",
        df.height(),
        df.width()
    );

    Ok(df)
}

fn table_error(path: &Path, source: PolarsError) -> IcarttError {
    IcarttError::TableParsingFailed {
        path: path.to_path_buf(),
        reason: source.to_string(),
    }
}
