//! Default command: render prompts for the configured selection.

use anyhow::{Context, Result};
use std::collections::HashMap;

use zodiac_prompt_core::Catalog;
use zodiac_prompt_reports::{to_json, to_text, write_prompt_files};
use zodiac_prompt_template::{PromptBuilder, SignPrompt, Template};

use crate::cli::args::{GenerateArgs, OutputFormat};
use crate::cli::ui::StatusPrinter;
use crate::clipboard::{copy_to_clipboard, CopyOutcome};
use crate::config::ZodiacPromptConfig;

/// Built-in catalog unless `catalog.path` points at a replacement.
pub fn load_catalog(config: &ZodiacPromptConfig) -> Result<Catalog> {
    match &config.catalog.path {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path.display());
            Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))
        }
        None => Catalog::builtin().context("Built-in catalog is invalid"),
    }
}

/// Custom template text wins over the named variant.
pub fn select_template(config: &ZodiacPromptConfig) -> Template {
    match &config.template.custom {
        Some(custom) => Template::parse(custom.as_str()),
        None => config.variant().template(),
    }
}

pub fn generate_prompts(config: &ZodiacPromptConfig, catalog: &Catalog) -> Vec<SignPrompt> {
    let selection = config.selection();
    let builder = PromptBuilder::new(catalog).with_template(select_template(config));

    let sample = builder.portrait(&selection, &selection.sign).bundle();
    let missing = builder.template().missing_tokens(&sample);
    if !missing.is_empty() {
        tracing::warn!(
            "Template tokens without a value are left as-is: {}",
            missing
                .iter()
                .map(|name| format!("[{}]", name))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    builder.build(&selection)
}

pub fn format_prompts(prompts: &[SignPrompt], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(to_text(prompts)),
        OutputFormat::Json => Ok(to_json(prompts)?),
    }
}

/// Status keyword shown after a copy attempt.
pub fn copy_message(outcome: &CopyOutcome, batch: bool) -> &'static str {
    match (outcome, batch) {
        (CopyOutcome::Copied { .. }, false) => "Copied!",
        (CopyOutcome::Copied { .. }, true) => "Copied all prompts!",
        (CopyOutcome::Failed, _) => "Copy failed",
    }
}

pub fn run_generate_command(args: GenerateArgs) -> Result<()> {
    let env_vars: HashMap<String, String> = std::env::vars().collect();
    let config =
        ZodiacPromptConfig::load_with_precedence(args.config.as_deref(), &args, &env_vars)?;

    let catalog = load_catalog(&config)?;
    let prompts = generate_prompts(&config, &catalog);
    tracing::info!("Rendered {} prompt(s)", prompts.len());

    println!("{}", format_prompts(&prompts, config.output_format())?);

    let printer = StatusPrinter::new();

    if let Some(output_dir) = &config.output.output_dir {
        let written = write_prompt_files(output_dir, &prompts)?;
        printer.status("Wrote", &format!("{} file(s) to {}", written.len(), output_dir.display()));
    }

    if config.output.copy {
        let outcome = copy_to_clipboard(&to_text(&prompts));
        let message = copy_message(&outcome, prompts.len() > 1);
        match outcome {
            CopyOutcome::Copied { backend } => {
                printer.success(message, "");
                tracing::debug!("Clipboard backend: {}", backend);
            }
            CopyOutcome::Failed => {
                printer.warning(message, "no clipboard available");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(toml_text: &str) -> ZodiacPromptConfig {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_default_config_generates_twelve() {
        let config = ZodiacPromptConfig::default();
        let catalog = load_catalog(&config).unwrap();
        let prompts = generate_prompts(&config, &catalog);

        assert_eq!(prompts.len(), 12);
        assert_eq!(prompts[0].sign, "Aries");
        assert_eq!(prompts[11].sign, "Pisces");
    }

    #[test]
    fn test_custom_template_overrides_variant() {
        let config = config_from(
            r#"
[selection]
sign = "Cancer"

[output]
variant = "rich"

[template]
custom = "[Zodiac Sign] in [tone_lighting]"
"#,
        );
        let catalog = load_catalog(&config).unwrap();
        let prompts = generate_prompts(&config, &catalog);

        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].prompt, format!("Cancer in {}", catalog.tone("dark").lighting));
    }

    #[test]
    fn test_format_prompts() {
        let prompts = vec![SignPrompt::new("Leo", "mane")];
        assert_eq!(format_prompts(&prompts, OutputFormat::Text).unwrap(), "mane");

        let json = format_prompts(&prompts, OutputFormat::Json).unwrap();
        assert!(json.contains("\"sign\": \"Leo\""));
    }

    #[test]
    fn test_copy_messages() {
        let copied = CopyOutcome::Copied { backend: "system" };
        assert_eq!(copy_message(&copied, false), "Copied!");
        assert_eq!(copy_message(&copied, true), "Copied all prompts!");
        assert_eq!(copy_message(&CopyOutcome::Failed, true), "Copy failed");
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let mut config = ZodiacPromptConfig::default();
        config.catalog.path = Some("/nonexistent/catalog.toml".into());
        assert!(load_catalog(&config).is_err());
    }
}
