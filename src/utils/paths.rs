use crate::constants::{REPORT_EXTENSION, REPORT_TIMESTAMP_FORMAT};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

// Report path for a run started at `now`: <dir>/<timestamp>.txt
pub fn timestamped_output_path(output_dir: &Path, now: &DateTime<Local>) -> PathBuf {
    output_dir.join(format!(
        "{}.{}",
        now.format(REPORT_TIMESTAMP_FORMAT),
        REPORT_EXTENSION
    ))
}
