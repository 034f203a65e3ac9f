use crate::error::{ReportError, Result};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `contents` to `path` so that readers only ever see the complete file.
///
/// The data goes to a temporary file in the same directory first and is then
/// renamed into place. An existing file at `path` is left untouched and
/// reported as an error.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let to_write_error = |source: io::Error| ReportError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(to_write_error)?;
    tmp.write_all(contents.as_bytes()).map_err(to_write_error)?;
    tmp.as_file().sync_all().map_err(to_write_error)?;
    tmp.persist_noclobber(path)
        .map_err(|err| to_write_error(err.error))?;

    Ok(())
}

/// Ensure `dir` exists and is a directory
pub fn ensure_directory(dir: &Path) -> Result<()> {
    let to_dir_error = |source: io::Error| ReportError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(dir).map_err(to_dir_error)?;
    if !metadata.is_dir() {
        return Err(to_dir_error(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }
    Ok(())
}
