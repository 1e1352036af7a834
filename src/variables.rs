//! Best-effort variable definition extraction from ICARTT headers.
//!
//! The conventional FFI 1001 layout places the dependent-variable count at
//! line index 9 and the definition block (`NAME, UNIT, DESCRIPTION...`) at
//! index 12. When the layout does not hold, extraction returns an empty
//! list rather than an error so it can never block table extraction.

use crate::layout::LayoutProfile;
use crate::models::VariableDef;
use std::collections::HashMap;
use tracing::debug;

/// Extract variable definitions from the header using the layout profile.
///
/// Returns an empty list when too few header lines exist or the count line
/// does not parse as an integer. Block lines past the end of the available
/// header are simply absent from the result.
pub fn extract_variable_defs(header_lines: &[String], profile: &LayoutProfile) -> Vec<VariableDef> {
    if header_lines.len() < profile.min_header_lines {
        return Vec::new();
    }

    let count: usize = match header_lines[profile.variable_count_index].trim().parse() {
        Ok(n) => n,
        Err(_) => {
            debug!(
                "Variable count line {:?} is not an integer, skipping variable extraction",
                header_lines[profile.variable_count_index]
            );
            return Vec::new();
        }
    };

    let start = profile.variable_block_start;
    let end = start.saturating_add(count).min(header_lines.len());
    let block = header_lines.get(start..end).unwrap_or_default();

    let mut defs: Vec<VariableDef> = block.iter().map(|line| parse_definition(line)).collect();

    let per_variable = per_variable_missing(header_lines);
    if !per_variable.is_empty() {
        for def in &mut defs {
            def.missing = per_variable.get(&def.name).copied();
        }
    }

    debug!(
        "Extracted {} of {} declared variable definitions",
        defs.len(),
        count
    );

    defs
}

/// Parse one `NAME, UNIT, DESCRIPTION...` definition line.
///
/// The name is always taken, even when empty after trimming. Unit and
/// description normalize empty strings to absent; description keeps any
/// embedded commas.
fn parse_definition(line: &str) -> VariableDef {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    let mut def = VariableDef::new(parts[0]);
    def.unit = parts.get(1).filter(|u| !u.is_empty()).map(|u| u.to_string());

    if parts.len() > 2 {
        let description = parts[2..].join(",").trim().to_string();
        if !description.is_empty() {
            def.description = Some(description);
        }
    }

    def
}

/// Per-variable missing indicators, where a header declares them.
///
/// No producer convention for this is standardized; most files use a single
/// sentinel across all columns, so this hook currently finds nothing.
fn per_variable_missing(_header_lines: &[String]) -> HashMap<String, f64> {
    HashMap::new()
}
