//! Per-sign prompt files.

use std::path::{Path, PathBuf};

use zodiac_prompt_template::SignPrompt;

use crate::block::to_copy_all_block;
use crate::filename::{generate_output_filename, ALL_SIGNS_FILENAME};
use crate::validation::validate_output_directory;
use crate::ReportError;

/// Write one file per prompt into `dir`.
///
/// With more than one prompt the copy-all block is also written to
/// [`ALL_SIGNS_FILENAME`]. Existing files are overwritten. Returns the
/// written paths in output order.
pub fn write_prompt_files(dir: &Path, prompts: &[SignPrompt]) -> Result<Vec<PathBuf>, ReportError> {
    validate_output_directory(dir)?;

    let mut written = Vec::with_capacity(prompts.len() + 1);
    for entry in prompts {
        let path = dir.join(generate_output_filename(&entry.sign));
        std::fs::write(&path, &entry.prompt)?;
        log::debug!("Wrote {} prompt to {}", entry.sign, path.display());
        written.push(path);
    }

    if prompts.len() > 1 {
        let path = dir.join(ALL_SIGNS_FILENAME);
        std::fs::write(&path, to_copy_all_block(prompts))?;
        written.push(path);
    }

    log::info!("Wrote {} file(s) to {}", written.len(), dir.display());
    Ok(written)
}
