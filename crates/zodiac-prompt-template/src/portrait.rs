//! Zodiac portrait prompt.

use zodiac_prompt_core::{FragmentRecord, ThemeFragments, ToneFragments, ZodiacFragments};

use crate::bundle::TokenBundle;
use crate::template::Template;
use crate::traits::Prompt;

/// Token replaced by the sign name.
pub const SIGN_TOKEN: &str = "Zodiac Sign";
/// Token replaced by the gender representation.
pub const GENDER_TOKEN: &str = "gender_representation";

/// Declarative portrait prompt with every fragment already resolved.
///
/// # Example
///
/// ```rust
/// use zodiac_prompt_core::Catalog;
/// use zodiac_prompt_template::{PortraitPrompt, Prompt, TemplateVariant};
///
/// let catalog = Catalog::builtin().unwrap();
/// let template = TemplateVariant::Classic.template();
///
/// let prompt = PortraitPrompt {
///     template: &template,
///     sign: "Leo",
///     gender: catalog.gender("male"),
///     tone: catalog.tone("happy"),
///     theme: catalog.theme("summer"),
///     zodiac: catalog.sign("Leo").1,
/// };
///
/// assert!(prompt.render().starts_with("mystical fantasy portrait of a beautiful man"));
/// ```
#[derive(Debug, Clone)]
pub struct PortraitPrompt<'a> {
    pub template: &'a Template,
    /// Sign name written into `[Zodiac Sign]`.
    pub sign: &'a str,
    /// Gender representation, e.g. `woman`.
    pub gender: &'a str,
    pub tone: &'a ToneFragments,
    pub theme: &'a ThemeFragments,
    pub zodiac: &'a ZodiacFragments,
}

impl PortraitPrompt<'_> {
    /// Token values for this portrait.
    pub fn bundle(&self) -> TokenBundle {
        let mut bundle = TokenBundle::new()
            .with(SIGN_TOKEN, self.sign)
            .with(GENDER_TOKEN, self.gender);
        bundle.extend(self.tone.tokens());
        bundle.extend(self.theme.tokens());
        bundle.extend(self.zodiac.tokens());
        bundle
    }
}

impl Prompt for PortraitPrompt<'_> {
    fn render(&self) -> String {
        self.template.render(&self.bundle())
    }
}
