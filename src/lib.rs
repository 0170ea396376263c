pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;

// Re-export the library crates for convenience
pub use zodiac_prompt_core::{Catalog, ZodiacSign};
pub use zodiac_prompt_template::{PromptBuilder, Selection, SignPrompt, TemplateVariant};
