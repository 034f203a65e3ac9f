use crate::aggregate::merge_duplicate_entries;
use crate::error::{ReportError, Result};
use crate::formatting::format_report;
use crate::types::{ProcessorConfig, parse_entries};
use crate::utils::{ensure_directory, timestamped_output_path, write_atomic};
use chrono::Local;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Turns a raw Swift frontend timing log into a ranked report file
#[derive(Debug, Clone)]
pub struct LogProcessor {
    config: ProcessorConfig,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSummary {
    pub output_file: PathBuf,
    pub parsed_entries: usize,
    pub distinct_entries: usize,
    pub written_entries: usize,
}

impl LogProcessor {
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Read the log, merge and rank its entries, and write the report.
    ///
    /// Nothing is written unless every earlier step succeeded.
    pub fn process(&self) -> Result<ProcessSummary> {
        let config = &self.config;

        let full_text =
            fs::read_to_string(&config.path).map_err(|source| ReportError::FileRead {
                path: config.path.clone(),
                source,
            })?;

        let entries = parse_entries(&full_text);
        let parsed_entries = entries.len();
        let candidate_lines = full_text.lines().filter(|l| !l.trim().is_empty()).count();
        debug!(
            path = %config.path.display(),
            parsed_entries,
            skipped_lines = candidate_lines - parsed_entries,
            "parsed compiler log"
        );
        if parsed_entries == 0 && candidate_lines > 0 {
            warn!(
                path = %config.path.display(),
                "no timing records found; expected -debug-time-function-bodies output"
            );
        }

        let merged = merge_duplicate_entries(entries);
        let distinct_entries = merged.len();
        debug!(distinct_entries, "merged duplicate entries");

        let report = format_report(config.total_build_time, &merged, config.limit)?;

        ensure_directory(&config.output_path)?;
        let output_file = timestamped_output_path(&config.output_path, &Local::now());
        write_atomic(&output_file, &report)?;

        info!(
            output = %output_file.display(),
            entries = config.limit,
            "wrote compile time report"
        );

        Ok(ProcessSummary {
            output_file,
            parsed_entries,
            distinct_entries,
            written_entries: config.limit,
        })
    }
}
