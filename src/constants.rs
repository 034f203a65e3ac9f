/// Prefix of the first report line, followed by the total build time
pub const BUILD_TIME_HEADER: &str = "Total build time: ";

/// Unit suffix the Swift frontend appends to every timing value
pub const TIME_UNIT_SUFFIX: &str = "ms";

/// Extension of the written report file
pub const REPORT_EXTENSION: &str = "txt";

/// chrono format for the report file stem, precise enough that back-to-back runs differ
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S%.9f";
