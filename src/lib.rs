//! ICARTT Processor Library
//!
//! A Rust library for reading ICARTT (.ict) atmospheric research data files
//! and converting them to CSV or optimized Apache Parquet files.
//!
//! This library provides tools for:
//! - Parsing the self-describing header boundary from the file's first line
//! - Extracting the data table below the boundary with Polars
//! - Best-effort recovery of descriptive metadata and variable definitions
//!   from the unstandardized, convention-driven header layout
//! - Detecting missing-value sentinels (-9999 and friends) from header text
//! - Exporting tables to CSV and Snappy-compressed Parquet
//!
//! The format is self-describing only for the header *length*, never for its
//! content, so every metadata extraction path degrades gracefully instead of
//! failing. Only structural problems (malformed first line, CSV parse
//! failures, unwritable destinations) surface as errors.

pub mod cli;
pub mod constants;
pub mod error;
pub mod export;
pub mod header;
pub mod layout;
pub mod metadata;
pub mod models;
pub mod reader;
pub mod sentinels;
pub mod table;
pub mod variables;

// Re-export commonly used types
pub use error::{IcarttError, Result};
pub use models::{FormatInfo, MetadataRecord, TableOptions, VariableDef};
pub use reader::IcarttReader;
