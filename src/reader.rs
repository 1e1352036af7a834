//! General ICARTT/ICT file reader.
//!
//! A reader is bound to one file path. The header boundary from the first
//! line is parsed once at construction and cached; every other extractor is
//! a pure function of file contents plus that cached value, safe to call
//! repeatedly and in any order. Table extraction fails loudly on structural
//! problems while the metadata extractors only ever degrade.

use crate::constants::{CSV_EXTENSION, PARQUET_EXTENSION};
use crate::error::Result;
use crate::layout::{self, LayoutProfile};
use crate::models::{FormatInfo, MetadataRecord, TableOptions, VariableDef};
use crate::{export, header, metadata, sentinels, table, variables};
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reader for one ICARTT file.
#[derive(Debug, Clone)]
pub struct IcarttReader {
    info: FormatInfo,
    profile: &'static LayoutProfile,
}

impl IcarttReader {
    /// Open a file, parsing and caching its format information.
    ///
    /// Fails when the first line does not declare a valid header boundary.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let info = header::read_format_info(path.as_ref())?;
        let profile = layout::profile_for(&info.ffi);

        debug!(
            "Opened {} with layout profile for FFI {}",
            info.path.display(),
            profile.ffi
        );

        Ok(Self { info, profile })
    }

    /// Cached format information from the first line.
    pub fn info(&self) -> &FormatInfo {
        &self.info
    }

    /// Path the reader is bound to.
    pub fn path(&self) -> &Path {
        &self.info.path
    }

    /// Raw header lines (including line 1), possibly fewer than
    /// `header_length` on short files.
    pub fn read_header_lines(&self) -> Result<Vec<String>> {
        header::read_header_lines(&self.info.path, self.info.header_length)
    }

    /// Best-effort descriptive metadata. Only I/O problems surface as
    /// errors; header content that does not match the conventional layout
    /// yields a smaller record.
    pub fn read_metadata(&self) -> Result<MetadataRecord> {
        let lines = self.read_header_lines()?;
        Ok(metadata::extract_metadata(&self.info, &lines, self.profile))
    }

    /// Best-effort variable definitions, empty when the conventional layout
    /// does not hold.
    pub fn read_variable_defs(&self) -> Result<Vec<VariableDef>> {
        let lines = self.read_header_lines()?;
        Ok(variables::extract_variable_defs(&lines, self.profile))
    }

    /// Missing-value sentinel candidates detected from the header, with the
    /// common fallback set when nothing is found.
    pub fn missing_value_candidates(&self) -> Result<Vec<i64>> {
        let lines = self.read_header_lines()?;
        Ok(sentinels::detect_sentinels(&lines))
    }

    /// Best-effort collection and revision dates from the `date_info` line.
    pub fn collection_dates(&self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        let lines = self.read_header_lines()?;
        Ok(metadata::collection_dates(&lines, self.profile))
    }

    /// Extract the data table below the header boundary.
    pub fn read_table(&self, options: &TableOptions) -> Result<DataFrame> {
        let tokens = self.resolve_missing_tokens(options)?;
        table::read_table(&self.info, &tokens, options)
    }

    /// Extract the data table with default options (detected missing
    /// tokens, trimmed column names).
    pub fn read_table_default(&self) -> Result<DataFrame> {
        self.read_table(&TableOptions::default())
    }

    /// Export the table as CSV, defaulting the destination to the input
    /// path with a `.csv` extension. Returns the resolved destination.
    pub fn export_csv(&self, destination: Option<&Path>) -> Result<PathBuf> {
        let out_path = self.resolve_destination(destination, CSV_EXTENSION);
        let mut df = self.read_table_default()?;
        export::write_csv(&mut df, &out_path)?;
        Ok(out_path)
    }

    /// Export the table as Parquet, defaulting the destination to the input
    /// path with a `.parquet` extension. Returns the resolved destination.
    pub fn export_parquet(&self, destination: Option<&Path>) -> Result<PathBuf> {
        let out_path = self.resolve_destination(destination, PARQUET_EXTENSION);
        let mut df = self.read_table_default()?;
        export::write_parquet(&mut df, &out_path)?;
        Ok(out_path)
    }

    fn resolve_missing_tokens(&self, options: &TableOptions) -> Result<Vec<String>> {
        if let Some(tokens) = &options.missing_tokens {
            return Ok(tokens.clone());
        }

        let candidates = self.missing_value_candidates()?;
        Ok(candidates.iter().map(|v| v.to_string()).collect())
    }

    fn resolve_destination(&self, destination: Option<&Path>, extension: &str) -> PathBuf {
        match destination {
            Some(path) => path.to_path_buf(),
            None => self.info.path.with_extension(extension),
        }
    }
}
