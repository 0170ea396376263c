use insta::assert_snapshot;
use zodiac_prompt_core::Catalog;
use zodiac_prompt_reports::to_copy_all_block;
use zodiac_prompt_template::{PromptBuilder, Selection, Template};

#[test]
fn test_classic_prompt_male_happy_summer_leo() {
    let catalog = Catalog::builtin().unwrap();
    let prompt = PromptBuilder::new(&catalog)
        .build_prompt(&Selection::new("male", "happy", "summer", "Leo"));

    assert_snapshot!(prompt, @"mystical fantasy portrait of a beautiful man representing Leo, sunlit golden gown, airy sheer cape, bright coastal horizon with shimmering heat haze background, huge Leo glyph burning like a sun behind the subject; repeating Leo glyphs as faint pattern; Leo constellation shining boldly, glowing zodiac symbol, joyful, warm, celebratory atmosphere, wide warm smile, cheerful sparkling eyes facial expression, highly detailed digital illustration, golden hour glow, soft rim light lighting, sun motifs, warm glints, sparkling dust elements, sunburst diadem, lion-mane collar, regal radiance, ethereal, fantasy art, 4k, ultra detailed");
}

#[test]
fn test_classic_prompt_theme_fallback() {
    let catalog = Catalog::builtin().unwrap();
    let prompt = PromptBuilder::new(&catalog)
        .build_prompt(&Selection::new("non-binary", "neutral", "nowhere", "Pisces"));

    assert_snapshot!(prompt, @"mystical fantasy portrait of a beautiful androgynous deity representing Pisces, starlit royal dress with nebula patterns, celestial cape, deep nebula with distant planets and starfields background, Pisces glyph as luminous seal behind the head; repeating Pisces sigils; Pisces constellation as two linked arcs, glowing zodiac symbol, calm, balanced, composed atmosphere, serene neutral expression, relaxed features facial expression, highly detailed digital illustration, natural studio light, even diffusion lighting, orbit rings, constellations, cosmic dust, golden astrolabe motifs elements, twin fish motifs, swirling water embroidery, pearlescent shimmer, ethereal, fantasy art, 4k, ultra detailed");
}

#[test]
fn test_copy_all_block_with_sign_only_template() {
    let catalog = Catalog::builtin().unwrap();
    let prompts = PromptBuilder::new(&catalog)
        .with_template(Template::parse("[Zodiac Sign] [unset]"))
        .build(&Selection::default());

    assert_snapshot!(to_copy_all_block(&prompts), @r"
    Aries:
    Aries [unset]

    Taurus:
    Taurus [unset]

    Gemini:
    Gemini [unset]

    Cancer:
    Cancer [unset]

    Leo:
    Leo [unset]

    Virgo:
    Virgo [unset]

    Libra:
    Libra [unset]

    Scorpio:
    Scorpio [unset]

    Sagittarius:
    Sagittarius [unset]

    Capricorn:
    Capricorn [unset]

    Aquarius:
    Aquarius [unset]

    Pisces:
    Pisces [unset]
    ");
}
