// Module declarations
pub mod aggregate;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod processor;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use aggregate::merge_duplicate_entries;
pub use error::{ReportError, Result};
pub use formatting::{format_header, format_report};
pub use processor::{LogProcessor, ProcessSummary};
pub use types::{EntryKey, LogEntry, ProcessorConfig, Signature, SourceLocation, parse_entries};
