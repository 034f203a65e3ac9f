pub mod config;
pub mod ids;
pub mod log_entry;

pub use config::ProcessorConfig;
pub use ids::{EntryKey, Signature, SourceLocation};
pub use log_entry::{LogEntry, parse_entries};
