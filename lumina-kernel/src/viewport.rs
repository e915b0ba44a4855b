//! Viewport breakpoints - maps a viewport width to a feed column count.

/// Widths at or above this get four columns.
pub const WIDE_BREAKPOINT: u32 = 1280;
/// Widths at or above this (and below [`WIDE_BREAKPOINT`]) get three columns.
pub const MEDIUM_BREAKPOINT: u32 = 768;

/// Column count for a viewport width in CSS pixels.
pub fn columns_for_width(width: u32) -> usize {
    if width >= WIDE_BREAKPOINT {
        4
    } else if width >= MEDIUM_BREAKPOINT {
        3
    } else {
        2
    }
}
