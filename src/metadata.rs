//! Best-effort descriptive metadata extraction from ICARTT headers.
//!
//! Applies the conventional line-position mapping from the layout profile.
//! Positions outside the available header lines, or lines that trim to
//! empty, are simply omitted. Metadata extraction never fails on content:
//! a header that does not match the convention yields a smaller record.

use crate::layout::LayoutProfile;
use crate::models::{FormatInfo, MetadataRecord};
use chrono::NaiveDate;
use tracing::debug;

/// Extract descriptive metadata using the conventional layout.
///
/// Always records `path`, `header_length`, and `ffi` (when non-empty);
/// everything else is positional best-effort.
pub fn extract_metadata(
    info: &FormatInfo,
    header_lines: &[String],
    profile: &LayoutProfile,
) -> MetadataRecord {
    let mut meta = MetadataRecord::new();

    meta.insert("path", info.path.display().to_string());
    meta.insert("header_length", info.header_length.to_string());
    if !info.ffi.is_empty() {
        meta.insert("ffi", info.ffi.clone());
    }

    for &(index, field) in profile.metadata_fields {
        if let Some(value) = trimmed_line(header_lines, index) {
            meta.insert(field, value.to_string());
        }
    }

    debug!(
        "Extracted {} metadata fields from {} header lines",
        meta.len(),
        header_lines.len()
    );

    meta
}

/// Best-effort collection and revision dates from the `date_info` line.
///
/// The conventional layout carries `YYYY, MM, DD, YYYY, MM, DD` (collection
/// date, then revision date). Returns `None` whenever the line is absent or
/// does not parse as two dates.
pub fn collection_dates(
    header_lines: &[String],
    profile: &LayoutProfile,
) -> Option<(NaiveDate, NaiveDate)> {
    let line = trimmed_line(header_lines, profile.date_info_index)?;

    let fields: Vec<i64> = line
        .split(',')
        .map(|t| t.trim().parse::<i64>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    if fields.len() != crate::constants::DATE_INFO_TOKEN_COUNT {
        return None;
    }

    let collection = NaiveDate::from_ymd_opt(fields[0] as i32, fields[1] as u32, fields[2] as u32)?;
    let revision = NaiveDate::from_ymd_opt(fields[3] as i32, fields[4] as u32, fields[5] as u32)?;

    Some((collection, revision))
}

fn trimmed_line(lines: &[String], index: usize) -> Option<&str> {
    let value = lines.get(index)?.trim();
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FFI_1001;
    use std::path::PathBuf;

    fn test_info() -> FormatInfo {
        FormatInfo {
            path: PathBuf::from("/data/flight1.ict"),
            header_length: 13,
            ffi: "1001".to_string(),
        }
    }

    fn header(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_conventional_header_maps_all_fields() {
        let lines = header(&[
            "13, 1001",
            "Doe, Jane",
            "NASA Langley Research Center",
            "Trace gas measurements",
            "DISCOVER-AQ",
            "1, 1",
            "2014, 08, 02, 2014, 08, 05",
            "1.0",
            "Time_Start, seconds",
        ]);

        let meta = extract_metadata(&test_info(), &lines, &FFI_1001);

        assert_eq!(meta.get("pi"), Some(&"Doe, Jane".to_string()));
        assert_eq!(
            meta.get("organization"),
            Some(&"NASA Langley Research Center".to_string())
        );
        assert_eq!(meta.get("mission"), Some(&"DISCOVER-AQ".to_string()));
        assert_eq!(meta.get("data_interval"), Some(&"1.0".to_string()));
        assert_eq!(
            meta.get("independent_variable"),
            Some(&"Time_Start, seconds".to_string())
        );
        assert_eq!(meta.get("path"), Some(&"/data/flight1.ict".to_string()));
        assert_eq!(meta.get("header_length"), Some(&"13".to_string()));
        assert_eq!(meta.get("ffi"), Some(&"1001".to_string()));
    }

    #[test]
    fn test_short_header_degrades_to_fixed_fields() {
        let lines = header(&["13, 1001", "Doe, Jane"]);

        let meta = extract_metadata(&test_info(), &lines, &FFI_1001);

        assert_eq!(meta.get("pi"), Some(&"Doe, Jane".to_string()));
        assert!(meta.contains_key("path"));
        assert!(meta.contains_key("header_length"));
        assert!(!meta.contains_key("organization"));
    }

    #[test]
    fn test_empty_header_keeps_only_fixed_fields() {
        let meta = extract_metadata(&test_info(), &[], &FFI_1001);

        assert_eq!(meta.get("path"), Some(&"/data/flight1.ict".to_string()));
        assert_eq!(meta.get("header_length"), Some(&"13".to_string()));
        assert_eq!(meta.get("ffi"), Some(&"1001".to_string()));
        assert_eq!(meta.len(), 3);
    }

    #[test]
    fn test_blank_lines_are_omitted() {
        let lines = header(&["13, 1001", "   ", "NASA Langley"]);

        let meta = extract_metadata(&test_info(), &lines, &FFI_1001);

        assert!(!meta.contains_key("pi"));
        assert_eq!(meta.get("organization"), Some(&"NASA Langley".to_string()));
    }

    #[test]
    fn test_empty_ffi_is_omitted() {
        let mut info = test_info();
        info.ffi = String::new();

        let meta = extract_metadata(&info, &[], &FFI_1001);
        assert!(!meta.contains_key("ffi"));
    }

    #[test]
    fn test_collection_dates_conventional() {
        let lines = header(&[
            "13, 1001",
            "Doe, Jane",
            "NASA Langley",
            "desc",
            "mission",
            "1, 1",
            "2014, 08, 02, 2014, 08, 05",
        ]);

        let (collection, revision) = collection_dates(&lines, &FFI_1001).unwrap();
        assert_eq!(collection, NaiveDate::from_ymd_opt(2014, 8, 2).unwrap());
        assert_eq!(revision, NaiveDate::from_ymd_opt(2014, 8, 5).unwrap());
    }

    #[test]
    fn test_collection_dates_malformed_line() {
        let lines = header(&[
            "13, 1001",
            "Doe, Jane",
            "NASA Langley",
            "desc",
            "mission",
            "1, 1",
            "flight on 2nd August",
        ]);

        assert!(collection_dates(&lines, &FFI_1001).is_none());
    }

    #[test]
    fn test_collection_dates_missing_line() {
        let lines = header(&["13, 1001"]);
        assert!(collection_dates(&lines, &FFI_1001).is_none());
    }

    #[test]
    fn test_collection_dates_wrong_token_count() {
        let lines = header(&[
            "13, 1001", "a", "b", "c", "d", "e", "2014, 08, 02",
        ]);
        assert!(collection_dates(&lines, &FFI_1001).is_none());
    }
}
