//! Plain-text output.

use zodiac_prompt_template::SignPrompt;

/// Join prompts as `Sign:\nprompt`, separated by a blank line.
pub fn to_copy_all_block(prompts: &[SignPrompt]) -> String {
    prompts
        .iter()
        .map(|entry| format!("{}:\n{}", entry.sign, entry.prompt))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A lone prompt is printed bare; several use the copy-all block.
pub fn to_text(prompts: &[SignPrompt]) -> String {
    match prompts {
        [single] => single.prompt.clone(),
        _ => to_copy_all_block(prompts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_all_block_format() {
        let prompts = vec![
            SignPrompt::new("Aries", "first prompt"),
            SignPrompt::new("Taurus", "second prompt"),
        ];
        assert_eq!(
            to_copy_all_block(&prompts),
            "Aries:\nfirst prompt\n\nTaurus:\nsecond prompt"
        );
    }

    #[test]
    fn test_copy_all_block_empty() {
        assert_eq!(to_copy_all_block(&[]), "");
    }

    #[test]
    fn test_to_text_single_is_bare() {
        let prompts = vec![SignPrompt::new("Leo", "just the prompt")];
        assert_eq!(to_text(&prompts), "just the prompt");
    }

    #[test]
    fn test_to_text_many_uses_block() {
        let prompts = vec![SignPrompt::new("Leo", "a"), SignPrompt::new("Virgo", "b")];
        assert_eq!(to_text(&prompts), "Leo:\na\n\nVirgo:\nb");
    }
}
