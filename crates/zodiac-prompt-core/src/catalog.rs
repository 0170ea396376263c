//! The fragment catalog: all category tables, loaded and validated together.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::fragments::{FragmentRecord, ThemeFragments, ToneFragments, ZodiacFragments};
use crate::sign::ZodiacSign;
use crate::table::FragmentTable;

pub const GENDER_FALLBACK: &str = "female";
pub const TONE_FALLBACK: &str = "neutral";
pub const THEME_FALLBACK: &str = "space";
pub const SIGN_FALLBACK: &str = "Aries";

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fallback key '{key}' missing from {category} table")]
    MissingFallback { category: String, key: String },

    #[error("Sign '{0}' missing from signs table")]
    MissingSign(String),
}

/// On-disk shape of a catalog document.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    genders: BTreeMap<String, String>,
    tones: BTreeMap<String, ToneFragments>,
    themes: BTreeMap<String, ThemeFragments>,
    signs: BTreeMap<String, ZodiacFragments>,
}

/// Gender, tone, theme and sign tables.
///
/// Construction checks every table for its fallback key and the signs table
/// for all twelve signs, so lookups on a built catalog cannot fail.
#[derive(Debug, Clone)]
pub struct Catalog {
    genders: FragmentTable<String>,
    tones: FragmentTable<ToneFragments>,
    themes: FragmentTable<ThemeFragments>,
    signs: FragmentTable<ZodiacFragments>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loading catalog from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;

        for sign in ZodiacSign::ALL {
            if !raw.signs.contains_key(sign.name()) {
                return Err(CatalogError::MissingSign(sign.name().to_string()));
            }
        }

        let catalog = Self {
            genders: FragmentTable::new("gender", raw.genders, GENDER_FALLBACK)?,
            tones: FragmentTable::new(ToneFragments::CATEGORY, raw.tones, TONE_FALLBACK)?,
            themes: FragmentTable::new(ThemeFragments::CATEGORY, raw.themes, THEME_FALLBACK)?,
            signs: FragmentTable::new(ZodiacFragments::CATEGORY, raw.signs, SIGN_FALLBACK)?,
        };
        log::debug!(
            "Catalog ready: {} genders, {} tones, {} themes, {} signs",
            catalog.genders.len(),
            catalog.tones.len(),
            catalog.themes.len(),
            catalog.signs.len()
        );
        Ok(catalog)
    }

    pub fn genders(&self) -> &FragmentTable<String> {
        &self.genders
    }

    pub fn tones(&self) -> &FragmentTable<ToneFragments> {
        &self.tones
    }

    pub fn themes(&self) -> &FragmentTable<ThemeFragments> {
        &self.themes
    }

    pub fn signs(&self) -> &FragmentTable<ZodiacFragments> {
        &self.signs
    }

    /// Prompt-ready representation for a gender key.
    pub fn gender(&self, key: &str) -> &str {
        self.genders.resolve(key)
    }

    pub fn tone(&self, key: &str) -> &ToneFragments {
        self.tones.resolve(key)
    }

    pub fn theme(&self, key: &str) -> &ThemeFragments {
        self.themes.resolve(key)
    }

    /// Sign fragments plus the sign name actually used.
    pub fn sign(&self, key: &str) -> (&str, &ZodiacFragments) {
        self.signs.resolve_entry(key)
    }

    pub fn zodiac(&self, sign: ZodiacSign) -> &ZodiacFragments {
        self.signs.resolve(sign.name())
    }
}
