//! JSON output.

use zodiac_prompt_template::SignPrompt;

use crate::ReportError;

/// Pretty-printed array of `{ "sign": ..., "prompt": ... }` objects.
pub fn to_json(prompts: &[SignPrompt]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(prompts)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let prompts = vec![
            SignPrompt::new("Aries", "ram"),
            SignPrompt::new("Taurus", "bull \"horns\""),
        ];
        let json = to_json(&prompts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["sign"], "Aries");
        assert_eq!(entries[0]["prompt"], "ram");
        assert_eq!(entries[1]["prompt"], "bull \"horns\"");
    }

    #[test]
    fn test_json_round_trips_into_sign_prompts() {
        let prompts = vec![SignPrompt::new("Gemini", "twins")];
        let parsed: Vec<SignPrompt> = serde_json::from_str(&to_json(&prompts).unwrap()).unwrap();
        assert_eq!(parsed, prompts);
    }
}
