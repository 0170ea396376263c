//! Output formatting for zodiac-prompt.
//!
//! This crate turns rendered prompts into deliverables:
//! - The copy-all text block
//! - A JSON document
//! - Per-sign files in an output directory

pub mod block;
pub mod filename;
pub mod json;
pub mod validation;
pub mod writer;

pub use block::{to_copy_all_block, to_text};
pub use filename::{generate_output_filename, ALL_SIGNS_FILENAME};
pub use json::to_json;
pub use validation::{check_output_path, validate_output_directory};
pub use writer::write_prompt_files;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("Output path {0} exists and is not a directory")]
    NotADirectory(std::path::PathBuf),

    #[error("Output directory {0} is read-only")]
    ReadOnly(std::path::PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
