//! Output directory checks.

use std::path::Path;

use crate::ReportError;

/// Reject a path that can never hold prompt files. Touches nothing on disk;
/// a missing directory passes.
pub fn check_output_path(dir: &Path) -> Result<(), ReportError> {
    if !dir.exists() {
        return Ok(());
    }
    if !dir.is_dir() {
        return Err(ReportError::NotADirectory(dir.to_path_buf()));
    }
    if std::fs::metadata(dir)?.permissions().readonly() {
        return Err(ReportError::ReadOnly(dir.to_path_buf()));
    }
    Ok(())
}

/// Make sure `dir` can receive prompt files, creating it if needed.
pub fn validate_output_directory(dir: &Path) -> Result<(), ReportError> {
    check_output_path(dir)?;

    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
        log::debug!("Created output directory {}", dir.display());
    }

    if std::fs::metadata(dir)?.permissions().readonly() {
        return Err(ReportError::ReadOnly(dir.to_path_buf()));
    }

    Ok(())
}
