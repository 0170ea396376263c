//! Core types for zodiac-prompt.
//!
//! This crate provides the static data the prompt generator works from:
//! - Fragment records for tones, themes and zodiac signs
//! - Fragment tables with a guaranteed fallback key
//! - The twelve zodiac signs in canonical order
//! - The built-in fragment catalog

mod catalog;
mod fragments;
mod sign;
mod table;

pub use catalog::{
    Catalog, CatalogError, GENDER_FALLBACK, SIGN_FALLBACK, THEME_FALLBACK, TONE_FALLBACK,
};
pub use fragments::{FragmentRecord, ThemeFragments, ToneFragments, ZodiacFragments};
pub use sign::{ParseSignError, ZodiacSign};
pub use table::{resolve, FragmentTable};
