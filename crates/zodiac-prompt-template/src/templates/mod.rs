//! Built-in template texts.

/// The original portrait template.
pub const CLASSIC: &str = concat!(
    "mystical fantasy portrait of a beautiful [gender_representation] representing [Zodiac Sign], ",
    "[theme_clothes], [theme_background] background, [zodiac_in_background], glowing zodiac symbol, ",
    "[tone_atmosphere] atmosphere, [tone_expression] facial expression, highly detailed digital illustration, ",
    "[tone_lighting] lighting, [theme_elements] elements, [zodiac_iconography], ethereal, fantasy art, 4k, ultra detailed"
);

/// Portrait template with a per-sign persona and prop.
///
/// The sign name appears three times so the character stays recognizable
/// across a batch.
pub const RICH: &str = concat!(
    "mystical fantasy portrait of a beautiful [gender_representation] embodying [Zodiac Sign], ",
    "[zodiac_persona], wearing [theme_clothes], holding [zodiac_prop], ",
    "[theme_background] background, [zodiac_in_background], glowing [Zodiac Sign] zodiac symbol, ",
    "[tone_atmosphere] atmosphere, [tone_expression] facial expression, [tone_lighting] lighting, ",
    "[theme_elements] elements, [zodiac_iconography], consistent [Zodiac Sign] character design, ",
    "highly detailed digital illustration, ethereal, fantasy art, 4k, ultra detailed"
);
