pub mod args;
pub mod commands;
pub mod root;
pub mod ui;

pub use args::{validate_generate_args, Args, Commands, GenerateArgs, OutputFormat};
pub use root::RootCommand;
