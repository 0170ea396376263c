//! Template engine and prompt builder for zodiac-prompt.
//!
//! A [`Template`] is scanned once into literal text and `[token]`
//! placeholders. A [`PromptBuilder`] resolves a [`Selection`] against the
//! fragment catalog and renders one prompt per sign.
//!
//! # Example
//!
//! ```rust
//! use zodiac_prompt_core::Catalog;
//! use zodiac_prompt_template::{PromptBuilder, Selection, TemplateVariant};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let builder = PromptBuilder::new(&catalog).with_variant(TemplateVariant::Rich);
//!
//! let selection = Selection::new("female", "dark", "winter", "Aries");
//! let prompt = builder.build_prompt(&selection);
//! assert!(prompt.contains("woman"));
//! ```

mod builder;
mod bundle;
mod portrait;
mod template;
mod templates;
mod traits;
mod types;

pub use builder::PromptBuilder;
pub use bundle::TokenBundle;
pub use portrait::{PortraitPrompt, GENDER_TOKEN, SIGN_TOKEN};
pub use template::{render, Segment, Template};
pub use traits::Prompt;
pub use types::{Selection, SignChoice, SignPrompt, TemplateVariant, UnknownVariantError};
