//! ICARTT header boundary parsing and raw header reading.
//!
//! The first line of an ICARTT file declares the header length and the format
//! index (`<header_length>,<ffi>[,...]`). That boundary is the only
//! self-describing part of the format, so it is parsed strictly and fails
//! fast. Header *content* below it is read verbatim for the heuristic
//! extractors, with invalid byte sequences decoded leniently rather than
//! failing the whole read.

use crate::error::{IcarttError, Result};
use crate::models::FormatInfo;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parse the first line of the file into cached format information.
pub fn read_format_info(path: &Path) -> Result<FormatInfo> {
    let first_line = read_raw_lines(path, 1)?.into_iter().next().unwrap_or_default();
    let info = parse_format_line(path, &first_line)?;

    debug!(
        "Parsed format info for {}: header_length={}, ffi={}",
        path.display(),
        info.header_length,
        info.ffi
    );

    Ok(info)
}

/// Read the raw header lines (including line 1), stopping early without
/// error if the file ends first. Line terminators are stripped.
pub fn read_header_lines(path: &Path, header_length: usize) -> Result<Vec<String>> {
    read_raw_lines(path, header_length)
}

fn parse_format_line(path: &Path, line: &str) -> Result<FormatInfo> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    if parts.len() < 2 {
        return Err(IcarttError::InvalidFormat {
            path: path.to_path_buf(),
            reason: format!("unexpected first line: {:?}", line),
        });
    }

    let header_length: usize = parts[0].parse().map_err(|_| IcarttError::InvalidFormat {
        path: path.to_path_buf(),
        reason: format!("header length is not an integer: {:?}", parts[0]),
    })?;

    if header_length == 0 {
        return Err(IcarttError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "header length must be at least 1".to_string(),
        });
    }

    Ok(FormatInfo {
        path: path.to_path_buf(),
        header_length,
        ffi: parts[1].to_string(),
    })
}

/// Read up to `limit` lines, decoding invalid UTF-8 sequences leniently.
fn read_raw_lines(path: &Path, limit: usize) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::with_capacity(limit.min(256));
    let mut buf = Vec::new();

    while lines.len() < limit {
        buf.clear();
        let bytes_read = reader.read_until(b'\n', &mut buf)?;
        if bytes_read == 0 {
            break;
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_format_info_parsing() {
        let temp_file = write_file("13, 1001\nDoe, Jane\n");

        let info = read_format_info(temp_file.path()).unwrap();
        assert_eq!(info.header_length, 13);
        assert_eq!(info.ffi, "1001");
        assert_eq!(info.path, temp_file.path());
    }

    #[test]
    fn test_format_info_extra_tokens_ignored() {
        let temp_file = write_file("27,1001,V02_2014\n");

        let info = read_format_info(temp_file.path()).unwrap();
        assert_eq!(info.header_length, 27);
        assert_eq!(info.ffi, "1001");
    }

    #[test]
    fn test_format_info_rejects_single_token() {
        let temp_file = write_file("13\ndata\n");

        let result = read_format_info(temp_file.path());
        assert!(matches!(result, Err(IcarttError::InvalidFormat { .. })));
    }

    #[test]
    fn test_format_info_rejects_non_integer_length() {
        let temp_file = write_file("thirteen, 1001\n");

        let result = read_format_info(temp_file.path());
        assert!(matches!(result, Err(IcarttError::InvalidFormat { .. })));
    }

    #[test]
    fn test_format_info_rejects_negative_length() {
        let temp_file = write_file("-3, 1001\n");

        let result = read_format_info(temp_file.path());
        assert!(matches!(result, Err(IcarttError::InvalidFormat { .. })));
    }

    #[test]
    fn test_format_info_rejects_zero_length() {
        let temp_file = write_file("0, 1001\n");

        let result = read_format_info(temp_file.path());
        assert!(matches!(result, Err(IcarttError::InvalidFormat { .. })));
    }

    #[test]
    fn test_format_info_rejects_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let result = read_format_info(temp_file.path());
        assert!(matches!(result, Err(IcarttError::InvalidFormat { .. })));
    }

    #[test]
    fn test_header_lines_strip_terminators() {
        let temp_file = write_file("3, 1001\r\nline two\r\nline three\nrow,1,2\n");

        let lines = read_header_lines(temp_file.path(), 3).unwrap();
        assert_eq!(lines, vec!["3, 1001", "line two", "line three"]);
    }

    #[test]
    fn test_header_lines_short_file_truncates() {
        let temp_file = write_file("10, 1001\nonly line\n");

        let lines = read_header_lines(temp_file.path(), 10).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_header_lines_lenient_decoding() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"2, 1001\nPI: J\xf8rgensen\n").unwrap();

        let lines = read_header_lines(temp_file.path(), 2).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("PI: J"));
    }
}
