//! Conventional ICARTT header layout profiles.
//!
//! ICARTT files declare their header *length* on the first line but not the
//! position of individual header fields. The offsets below follow the layout
//! commonly used with FFI 1001 (one-dimensional time series) files. They are
//! a convention, not a guarantee, so every consumer of a profile must degrade
//! gracefully when a header does not match it.

/// Fixed line-position mapping for one ICARTT format-index convention.
///
/// All indices are 0-based into the raw header lines (line 0 is the
/// `header_length,ffi` line itself).
#[derive(Debug, Clone, Copy)]
pub struct LayoutProfile {
    /// Format index this profile was derived from
    pub ffi: &'static str,

    /// Header line positions mapped to descriptive metadata field names
    pub metadata_fields: &'static [(usize, &'static str)],

    /// Position of the `date_info` line
    pub date_info_index: usize,

    /// Position of the dependent-variable count line
    pub variable_count_index: usize,

    /// First position of the variable-definition block
    pub variable_block_start: usize,

    /// Minimum header lines required before attempting variable extraction
    pub min_header_lines: usize,
}

/// Layout convention for FFI 1001 one-dimensional time-series files.
pub const FFI_1001: LayoutProfile = LayoutProfile {
    ffi: "1001",
    metadata_fields: &[
        (1, "pi"),
        (2, "organization"),
        (3, "data_description"),
        (4, "mission"),
        (5, "volume_info"),
        (6, "date_info"),
        (7, "data_interval"),
        (8, "independent_variable"),
    ],
    date_info_index: 6,
    variable_count_index: 9,
    variable_block_start: 12,
    min_header_lines: 11,
};

/// Select the layout profile for a declared format index.
///
/// Only the FFI 1001 convention is profiled today; it is applied to every
/// format index since the extractors guard all positional reads anyway.
/// Additional profiles slot in here without touching the extractors.
pub fn profile_for(_ffi: &str) -> &'static LayoutProfile {
    &FFI_1001
}
