//! Core types for prompt construction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::template::Template;
use crate::templates;

/// The user's current choices, one key per category.
///
/// Keys are passed through as typed; unknown keys resolve to the table's
/// fallback when the prompt is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub gender: String,
    pub tone: String,
    pub theme: String,
    /// A sign key, or `all` for one prompt per sign.
    pub sign: String,
}

impl Selection {
    pub fn new(
        gender: impl Into<String>,
        tone: impl Into<String>,
        theme: impl Into<String>,
        sign: impl Into<String>,
    ) -> Self {
        Self {
            gender: gender.into(),
            tone: tone.into(),
            theme: theme.into(),
            sign: sign.into(),
        }
    }

    pub fn sign_choice(&self) -> SignChoice {
        SignChoice::parse(&self.sign)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new("female", "dark", "winter", "all")
    }
}

/// Whether a selection asks for one sign or the whole zodiac.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignChoice {
    All,
    One(String),
}

impl SignChoice {
    /// `all` in any case selects batch mode; anything else is a sign key.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("all") {
            SignChoice::All
        } else {
            SignChoice::One(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SignChoice::All)
    }
}

/// One rendered prompt and the sign it was rendered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignPrompt {
    pub sign: String,
    pub prompt: String,
}

impl SignPrompt {
    pub fn new(sign: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            sign: sign.into(),
            prompt: prompt.into(),
        }
    }
}

/// Built-in template choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Sign, gender, theme, tone, background focus and iconography.
    #[default]
    Classic,
    /// Classic plus persona and prop, with the sign name repeated.
    Rich,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 2] = [TemplateVariant::Classic, TemplateVariant::Rich];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateVariant::Classic => "classic",
            TemplateVariant::Rich => "rich",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            TemplateVariant::Classic => templates::CLASSIC,
            TemplateVariant::Rich => templates::RICH,
        }
    }

    pub fn template(&self) -> Template {
        Template::parse(self.source())
    }
}

impl std::fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template variant '{0}' (expected 'classic' or 'rich')")]
pub struct UnknownVariantError(pub String);

impl FromStr for TemplateVariant {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(TemplateVariant::Classic),
            "rich" => Ok(TemplateVariant::Rich),
            _ => Err(UnknownVariantError(s.to_string())),
        }
    }
}
