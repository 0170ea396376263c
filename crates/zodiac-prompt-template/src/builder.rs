//! Selection-driven prompt builder.

use zodiac_prompt_core::{Catalog, ZodiacSign};

use crate::portrait::PortraitPrompt;
use crate::template::Template;
use crate::traits::Prompt;
use crate::types::{Selection, SignChoice, SignPrompt, TemplateVariant};

/// Builds portrait prompts from a [`Selection`].
///
/// Every category key is resolved against the catalog with its fixed
/// fallback (gender `female`, tone `neutral`, theme `space`, sign `Aries`),
/// so building never fails.
#[derive(Debug, Clone)]
pub struct PromptBuilder<'a> {
    catalog: &'a Catalog,
    template: Template,
}

impl<'a> PromptBuilder<'a> {
    /// Create a builder using the classic template.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            template: TemplateVariant::default().template(),
        }
    }

    /// Switch to a built-in template.
    pub fn with_variant(mut self, variant: TemplateVariant) -> Self {
        self.template = variant.template();
        self
    }

    /// Use a caller-supplied template.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Resolve every fragment for `sign_key` under the shared selection.
    pub fn portrait(&self, selection: &Selection, sign_key: &str) -> PortraitPrompt<'_> {
        let (sign, zodiac) = self.catalog.sign(sign_key);
        PortraitPrompt {
            template: &self.template,
            sign,
            gender: self.catalog.gender(&selection.gender),
            tone: self.catalog.tone(&selection.tone),
            theme: self.catalog.theme(&selection.theme),
            zodiac,
        }
    }

    /// Render a prompt for one sign, ignoring `selection.sign`.
    pub fn build_prompt_for_sign(&self, selection: &Selection, sign_key: &str) -> String {
        self.portrait(selection, sign_key).render()
    }

    /// Render a prompt for `selection.sign`.
    ///
    /// `all` is not a sign key here and resolves to the fallback sign; use
    /// [`Self::build`] to honor batch mode.
    pub fn build_prompt(&self, selection: &Selection) -> String {
        self.build_prompt_for_sign(selection, &selection.sign)
    }

    /// One prompt per sign, Aries through Pisces.
    pub fn build_prompts_for_all_signs(&self, selection: &Selection) -> Vec<SignPrompt> {
        log::debug!(
            "Building prompts for all signs (gender={}, tone={}, theme={})",
            selection.gender,
            selection.tone,
            selection.theme
        );
        ZodiacSign::ALL
            .iter()
            .map(|sign| {
                SignPrompt::new(
                    sign.name(),
                    self.build_prompt_for_sign(selection, sign.name()),
                )
            })
            .collect()
    }

    /// Batch or single output depending on `selection.sign`.
    pub fn build(&self, selection: &Selection) -> Vec<SignPrompt> {
        match selection.sign_choice() {
            SignChoice::All => self.build_prompts_for_all_signs(selection),
            SignChoice::One(key) => {
                let portrait = self.portrait(selection, &key);
                vec![SignPrompt::new(portrait.sign, portrait.render())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zodiac_prompt_core::{FragmentRecord, ThemeFragments, ToneFragments, ZodiacFragments};

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_rich_scenario_female_dark_winter_aries() {
        let catalog = catalog();
        let builder = PromptBuilder::new(&catalog).with_variant(TemplateVariant::Rich);
        let prompt = builder.build_prompt(&Selection::new("female", "dark", "winter", "Aries"));

        assert!(prompt.contains("woman"));
        assert!(prompt.contains("fur-trimmed royal cloak, icy blue silk gown"));
        assert!(prompt.contains("ominous, mysterious, arcane"));
        assert!(prompt.contains("ram-horn crown, horn-etched gold filigree, ember accents"));
        assert!(prompt.contains("a flaming ram-horn scepter"));
        assert!(!prompt.contains('['));
        assert!(!prompt.contains(']'));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_space() {
        let catalog = catalog();
        let builder = PromptBuilder::new(&catalog);
        let prompt = builder.build_prompt(&Selection::new("female", "dark", "atlantis", "Leo"));

        assert!(prompt.contains("starlit royal dress with nebula patterns, celestial cape"));
        assert!(!prompt.contains("atlantis"));
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        let catalog = catalog();
        let builder = PromptBuilder::new(&catalog);
        let fallback = builder.build_prompt(&Selection::new("", "", "", ""));
        let explicit = builder.build_prompt(&Selection::new("female", "neutral", "space", "Aries"));

        assert_eq!(fallback, explicit);
        assert!(fallback.contains("representing Aries"));
    }

    #[test]
    fn test_classic_matches_original_layout() {
        let catalog = catalog();
        let builder = PromptBuilder::new(&catalog);
        let prompt = builder.build_prompt(&Selection::new("male", "happy", "summer", "Leo"));

        assert!(prompt.starts_with(
            "mystical fantasy portrait of a beautiful man representing Leo, sunlit golden gown, airy sheer cape, "
        ));
        assert!(prompt.ends_with("sunburst diadem, lion-mane collar, regal radiance, ethereal, fantasy art, 4k, ultra detailed"));
        assert!(!prompt.contains("radiant sun-disc staff"));
    }

    #[test]
    fn test_batch_has_twelve_signs_in_order() {
        let catalog = catalog();
        let builder = PromptBuilder::new(&catalog).with_variant(TemplateVariant::Rich);
        let prompts = builder.build_prompts_for_all_signs(&Selection::default());

        let signs: Vec<&str> = prompts.iter().map(|p| p.sign.as_str()).collect();
        let expected: Vec<&str> = ZodiacSign::ALL.iter().map(ZodiacSign::name).collect();
        assert_eq!(signs, expected);

        for entry in &prompts {
            let (_, zodiac) = catalog.sign(&entry.sign);
            assert!(entry.prompt.contains(&zodiac.iconography), "{}", entry.sign);
            assert!(entry.prompt.contains(&format!("embodying {}", entry.sign)));
            assert!(!entry.prompt.contains('['), "{}", entry.sign);
        }

        let mut distinct: Vec<&str> = prompts.iter().map(|p| p.prompt.as_str()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn test_build_dispatches_on_sign_choice() {
        let catalog = catalog();
        let builder = PromptBuilder::new(&catalog);

        let all = builder.build(&Selection::new("male", "sad", "city", "All"));
        assert_eq!(all.len(), 12);

        let one = builder.build(&Selection::new("male", "sad", "city", "Scorpio"));
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].sign, "Scorpio");

        let unknown = builder.build(&Selection::new("male", "sad", "city", "Ophiuchus"));
        assert_eq!(unknown[0].sign, "Aries");
    }

    #[test]
    fn test_every_bundle_token_consumed() {
        let catalog = catalog();
        let builder = PromptBuilder::new(&catalog).with_variant(TemplateVariant::Rich);
        let selection = Selection::new("non-binary", "fear", "middle ages", "Gemini");
        let portrait = builder.portrait(&selection, "Gemini");
        let rendered = portrait.render();

        for name in portrait.bundle().names() {
            assert!(!rendered.contains(&format!("[{}]", name)), "[{}] left over", name);
        }
        assert_eq!(rendered, portrait.render());
    }

    #[test]
    fn test_custom_template_leaves_unknown_token() {
        let catalog = catalog();
        let builder = PromptBuilder::new(&catalog)
            .with_template(Template::parse("[gender_representation] under [weather] skies"));
        let prompt = builder.build_prompt(&Selection::new("male", "dark", "winter", "Leo"));

        assert_eq!(prompt, "man under [weather] skies");
    }

    #[test]
    fn test_rich_template_uses_every_fragment_token() {
        let rich = TemplateVariant::Rich.template();
        let names = rich.token_names();
        for token in ToneFragments::TOKENS
            .iter()
            .chain(ThemeFragments::TOKENS)
            .chain(ZodiacFragments::TOKENS)
        {
            assert!(names.contains(token), "rich template lacks [{}]", token);
        }
    }
}
