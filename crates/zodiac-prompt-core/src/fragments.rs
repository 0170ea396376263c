//! Fragment record definitions.

use serde::{Deserialize, Serialize};

/// A record of named text fragments for one category key.
///
/// Each record type fills a fixed set of template tokens. Records are
/// deserialized with `deny_unknown_fields`, so every entry of a table has
/// exactly the same fragment names.
pub trait FragmentRecord {
    /// Category name used in log and error messages.
    const CATEGORY: &'static str;

    /// Template tokens filled by this record, in declaration order.
    const TOKENS: &'static [&'static str];

    /// Token name / fragment text pairs, in the same order as [`Self::TOKENS`].
    fn tokens(&self) -> Vec<(&'static str, &str)>;
}

/// Mood fragments selected by tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToneFragments {
    /// Words describing the scene mood.
    pub atmosphere: String,
    /// Lighting directions for the image model.
    pub lighting: String,
    /// Facial expression matching the tone.
    pub expression: String,
}

impl FragmentRecord for ToneFragments {
    const CATEGORY: &'static str = "tone";
    const TOKENS: &'static [&'static str] = &["tone_atmosphere", "tone_lighting", "tone_expression"];

    fn tokens(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("tone_atmosphere", self.atmosphere.as_str()),
            ("tone_lighting", self.lighting.as_str()),
            ("tone_expression", self.expression.as_str()),
        ]
    }
}

/// Outfit and scenery fragments selected by theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFragments {
    /// Outfit or costume description.
    pub clothes: String,
    /// Background scene, without the word "background".
    pub background: String,
    /// Thematic elements sprinkled into the image.
    pub elements: String,
}

impl FragmentRecord for ThemeFragments {
    const CATEGORY: &'static str = "theme";
    const TOKENS: &'static [&'static str] = &["theme_clothes", "theme_background", "theme_elements"];

    fn tokens(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("theme_clothes", self.clothes.as_str()),
            ("theme_background", self.background.as_str()),
            ("theme_elements", self.elements.as_str()),
        ]
    }
}

/// Per-sign fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZodiacFragments {
    /// Facial features and styling that set the sign's character apart.
    pub persona: String,
    /// Wearable motifs reinforcing the sign.
    pub iconography: String,
    /// Instruction that the sign is prominent in the background.
    pub bg_focus: String,
    /// Signature object held or shown with the subject.
    pub prop: String,
}

impl FragmentRecord for ZodiacFragments {
    const CATEGORY: &'static str = "zodiac";
    const TOKENS: &'static [&'static str] = &[
        "zodiac_persona",
        "zodiac_iconography",
        "zodiac_in_background",
        "zodiac_prop",
    ];

    fn tokens(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("zodiac_persona", self.persona.as_str()),
            ("zodiac_iconography", self.iconography.as_str()),
            ("zodiac_in_background", self.bg_focus.as_str()),
            ("zodiac_prop", self.prop.as_str()),
        ]
    }
}
