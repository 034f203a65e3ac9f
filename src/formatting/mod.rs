use crate::constants::BUILD_TIME_HEADER;
use crate::error::{ReportError, Result};
use crate::types::LogEntry;

// Format the report header. Debug formatting keeps the fractional part ("10.0").
pub fn format_header(total_build_time: f64) -> String {
    format!("{}{:?}", BUILD_TIME_HEADER, total_build_time)
}

/// Render the report: header line, then the first `limit` ranked entries.
///
/// A limit larger than the number of ranked entries is a configuration error,
/// not a shorter report.
pub fn format_report(total_build_time: f64, ranked: &[LogEntry], limit: usize) -> Result<String> {
    if limit > ranked.len() {
        return Err(ReportError::LimitOutOfRange {
            limit,
            available: ranked.len(),
        });
    }

    let lines: Vec<String> = std::iter::once(format_header(total_build_time))
        .chain(ranked[..limit].iter().map(ToString::to_string))
        .collect();

    Ok(lines.join("\n"))
}
