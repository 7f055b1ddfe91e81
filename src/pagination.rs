//! Resume-point math: converts a logical "resume at line N" request into
//! transport-specific feed amounts.
//!
//! The two printer families model paper motion differently. The spooler
//! only accepts whole-line feeds counted from the top of the page; the
//! serial head moves in 1/180 inch units and can be wound backward. The
//! math is therefore parameterized per transport instead of shared.

use serde::{Deserialize, Serialize};

/// Whether the fixed header block offset is applied on every resumed page
/// or only when starting a fresh page.
///
/// The deployed spooler driver adds `header_lines` unconditionally, which
/// double-counts the header when resuming mid-page on some book formats.
/// That behavior is kept as the default; `FirstPageOnly` is the corrected
/// variant for books whose `last_printed_line` already includes the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderOffsetPolicy {
    Always,
    FirstPageOnly,
}

impl Default for HeaderOffsetPolicy {
    fn default() -> Self {
        HeaderOffsetPolicy::Always
    }
}

/// Absolute line (1-based, counted from page top) where the first
/// transaction row lands, given the logical resume point and the
/// pre-printed header block that is skipped and never re-printed.
pub fn actual_start_line(start_line: u32, header_lines: u32, policy: HeaderOffsetPolicy) -> u32 {
    match policy {
        HeaderOffsetPolicy::Always => start_line + header_lines,
        HeaderOffsetPolicy::FirstPageOnly => {
            if start_line <= 1 {
                start_line + header_lines
            } else {
                start_line
            }
        }
    }
}

/// Number of whole-line feeds the spooler must issue before the first row.
/// No feed when the target is already the first line.
pub fn feed_lines(start_line: u32, header_lines: u32, policy: HeaderOffsetPolicy) -> u32 {
    actual_start_line(start_line, header_lines, policy).saturating_sub(1)
}

/// Paper advance in 1/180 inch units to move a serial head from
/// `current_line` to `target_line`. `None` when no forward motion is
/// needed; reverse motion is a manual primitive, never computed here.
pub fn advance_units(target_line: u32, current_line: u32, line_spacing: u32) -> Option<u32> {
    if target_line > current_line {
        Some((target_line - current_line) * line_spacing)
    } else {
        None
    }
}
