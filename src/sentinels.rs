//! Missing-value sentinel detection from ICARTT headers.
//!
//! ICARTT headers usually declare sentinels like -9999 somewhere in the
//! header text, but the position varies between producers. The scan
//! deliberately over-collects: any explicitly signed integer token of large
//! magnitude anywhere in the header becomes a candidate. False positives
//! only affect which cell values are treated as missing.

use crate::constants::{FALLBACK_SENTINELS, SENTINEL_MIN_MAGNITUDE, SENTINEL_SCAN_LIMIT};
use tracing::debug;

/// Scan header lines for missing-value sentinel candidates.
///
/// Candidates are deduplicated preserving first occurrence. When nothing is
/// found, the common fallback set is returned.
pub fn detect_sentinels(header_lines: &[String]) -> Vec<i64> {
    let mut ordered = Vec::new();

    let scan = &header_lines[..header_lines.len().min(SENTINEL_SCAN_LIMIT)];
    for line in scan {
        for token in line.replace(',', " ").split_whitespace() {
            if let Some(value) = parse_signed_integer(token) {
                if value.abs() >= SENTINEL_MIN_MAGNITUDE && !ordered.contains(&value) {
                    ordered.push(value);
                }
            }
        }
    }

    if ordered.is_empty() {
        debug!("No sentinel candidates in header, using fallback set");
        return FALLBACK_SENTINELS.to_vec();
    }

    debug!("Detected sentinel candidates: {:?}", ordered);
    ordered
}

/// Parse tokens of the form `[+-]digits`. Unsigned tokens are rejected so
/// that ordinary header numbers (dates, counts, scale factors) never become
/// candidates.
fn parse_signed_integer(token: &str) -> Option<i64> {
    let rest = token.strip_prefix(['-', '+'])?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fallback_when_no_candidates() {
        let lines = header(&["17, 1001", "Doe, Jane", "2014, 08, 02", "1.0"]);
        assert_eq!(
            detect_sentinels(&lines),
            vec![-9999, -99999, -8888, 9999, 99999]
        );
    }

    #[test]
    fn test_detects_declared_sentinels() {
        let lines = header(&["17, 1001", "-9999, -99999", "scale 1, 1"]);
        assert_eq!(detect_sentinels(&lines), vec![-9999, -99999]);
    }

    #[test]
    fn test_deduplicates_preserving_order() {
        let lines = header(&["-9999, -9999, -8888", "-9999"]);
        assert_eq!(detect_sentinels(&lines), vec![-9999, -8888]);
    }

    #[test]
    fn test_positive_signed_tokens() {
        let lines = header(&["+9999 is the flag"]);
        assert_eq!(detect_sentinels(&lines), vec![9999]);
    }

    #[test]
    fn test_small_magnitude_rejected() {
        let lines = header(&["-998, -10, +5"]);
        assert_eq!(
            detect_sentinels(&lines),
            vec![-9999, -99999, -8888, 9999, 99999]
        );
    }

    #[test]
    fn test_magnitude_threshold_inclusive() {
        let lines = header(&["-999"]);
        assert_eq!(detect_sentinels(&lines), vec![-999]);
    }

    #[test]
    fn test_unsigned_numbers_ignored() {
        let lines = header(&["9999 rows", "year 2014"]);
        assert_eq!(
            detect_sentinels(&lines),
            vec![-9999, -99999, -8888, 9999, 99999]
        );
    }

    #[test]
    fn test_non_numeric_signed_tokens_ignored() {
        let lines = header(&["-9999m", "-99.99", "-", "+"]);
        assert_eq!(
            detect_sentinels(&lines),
            vec![-9999, -99999, -8888, 9999, 99999]
        );
    }

    #[test]
    fn test_scan_limit_bounds_work() {
        let mut lines: Vec<String> = (0..250).map(|_| "plain text".to_string()).collect();
        lines.push("-7777".to_string());

        // The declaring line sits past the scan bound
        assert_eq!(
            detect_sentinels(&lines),
            vec![-9999, -99999, -8888, 9999, 99999]
        );
    }
}
