//! Application constants for the ICARTT processor
//!
//! This module contains the fixed values used throughout the processor:
//! sentinel detection thresholds, fallback missing-value indicators,
//! and export file extensions.

// =============================================================================
// Missing-Value Sentinel Detection
// =============================================================================

/// Minimum absolute value for a signed integer token to qualify as a
/// missing-value sentinel candidate
pub const SENTINEL_MIN_MAGNITUDE: i64 = 999;

/// Maximum number of header lines scanned for sentinel candidates
pub const SENTINEL_SCAN_LIMIT: usize = 200;

/// Common missing-value sentinels used when the header yields no candidates
pub const FALLBACK_SENTINELS: &[i64] = &[-9999, -99999, -8888, 9999, 99999];

// =============================================================================
// File and Export Constants
// =============================================================================

/// Extension for ICARTT input files
pub const ICT_EXTENSION: &str = "ict";

/// Extension for row-delimited text export
pub const CSV_EXTENSION: &str = "csv";

/// Extension for columnar export
pub const PARQUET_EXTENSION: &str = "parquet";

// =============================================================================
// Date Parsing
// =============================================================================

/// Number of comma-separated tokens in a conventional `date_info` line
/// (collection date and revision date, each as `YYYY, MM, DD`)
pub const DATE_INFO_TOKEN_COUNT: usize = 6;
