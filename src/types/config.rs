use crate::error::{ReportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs for one processing run. Every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProcessorConfig {
    /// Raw compiler log to read
    pub path: PathBuf,
    /// Directory the report is written into
    pub output_path: PathBuf,
    /// Build duration in seconds, measured by the caller
    pub total_build_time: f64,
    /// Number of ranked entries to keep
    pub limit: usize,
}

impl ProcessorConfig {
    /// Load a config from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ReportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject values no run could make sense of
    pub fn validate(&self) -> Result<()> {
        if !self.total_build_time.is_finite() || self.total_build_time < 0.0 {
            return Err(ReportError::InvalidConfig {
                message: format!(
                    "total build time must be a non-negative number, got {}",
                    self.total_build_time
                ),
            });
        }
        Ok(())
    }
}
