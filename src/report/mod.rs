//! Presentation and export of calculation results.
//!
//! Rounding lives here and nowhere else: the calculation stages return
//! unrounded values and this module formats them for the results page and
//! the CSV download.

mod export;
mod format;
mod summary;

pub use export::{EXPORT_FILE_NAME, ExportOptions, export_csv, export_csv_bytes, export_headers};
pub use format::{format_amount, format_percent};
pub use summary::{BreakdownLine, DisplayRow, SummaryMetrics};
