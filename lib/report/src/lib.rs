//! # peergrid-report
//!
//! Pure string renderers for [`RankingOutput`]: pretty JSON for machines, a
//! standalone competitor-grid HTML page, and an aligned text table for the
//! terminal. No renderer performs I/O; the caller decides where bytes go and
//! owns user-visible messaging for engine failures.

pub mod html;
pub mod text;

use peergrid_core::RankingOutput;

pub use html::to_html;
pub use text::to_text;

/// Pretty-printed JSON rendering of a ranking result.
pub fn to_json(output: &RankingOutput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(output)
}
