use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use zodiac_prompt_reports::check_output_path;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Gender key (female, male, non-binary)
    #[arg(short, long)]
    pub gender: Option<String>,

    /// Tone key (dark, happy, sad, ...)
    #[arg(short, long)]
    pub tone: Option<String>,

    /// Theme key (winter, space, middle ages, ...)
    #[arg(long)]
    pub theme: Option<String>,

    /// Sign name, or "all" for one prompt per sign
    #[arg(short, long)]
    pub sign: Option<String>,

    /// Built-in template: classic or rich
    #[arg(long)]
    pub variant: Option<String>,

    /// Custom template text; overrides --variant
    #[arg(long)]
    pub template: Option<String>,

    /// Replacement fragment catalog (TOML)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Copy the output to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Also write one file per sign into this directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[arg(long, global = true)]
    pub debug: bool,

    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub generate_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the keys of each fragment table
    List {
        /// genders, tones, themes or signs; all tables when omitted
        category: Option<String>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub gender: Option<String>,
    pub tone: Option<String>,
    pub theme: Option<String>,
    pub sign: Option<String>,
    pub variant: Option<String>,
    pub template: Option<String>,
    pub catalog: Option<PathBuf>,
    pub format: Option<String>,
    pub copy: bool,
    pub output_dir: Option<PathBuf>,
    pub verbosity: u8,
    pub debug: bool,
    pub config: Option<PathBuf>,
    pub generate_config: bool,
}

impl From<&Args> for GenerateArgs {
    fn from(args: &Args) -> Self {
        GenerateArgs {
            gender: args.gender.clone(),
            tone: args.tone.clone(),
            theme: args.theme.clone(),
            sign: args.sign.clone(),
            variant: args.variant.clone(),
            template: args.template.clone(),
            catalog: args.catalog.clone(),
            format: args.format.clone(),
            copy: args.copy,
            output_dir: args.output_dir.clone(),
            verbosity: args.verbosity,
            debug: args.debug,
            config: args.config.clone(),
            generate_config: args.generate_config,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unsupported format: {}", s)),
        }
    }
}

/// Table names accepted by `list`.
pub const LIST_CATEGORIES: [&str; 4] = ["genders", "tones", "themes", "signs"];

pub fn validate_generate_args(args: &GenerateArgs) -> Result<()> {
    if let Some(output_dir) = &args.output_dir {
        check_output_path(output_dir).map_err(|e| {
            anyhow!(
                "Output directory check failed: {}: {}",
                output_dir.display(),
                e
            )
        })?;
    }

    Ok(())
}

pub fn validate_list_category(category: Option<&str>) -> Result<()> {
    match category {
        Some(name) if !LIST_CATEGORIES.contains(&name) => Err(anyhow!(
            "Unknown category: {} (expected one of {})",
            name,
            LIST_CATEGORIES.join(", ")
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_generate_flags() {
        let args = Args::parse_from([
            "zodiac-prompt",
            "-g",
            "male",
            "-t",
            "happy",
            "--theme",
            "middle ages",
            "-s",
            "Leo",
            "--variant",
            "rich",
            "--copy",
        ]);
        let generate = GenerateArgs::from(&args);

        assert!(args.command.is_none());
        assert_eq!(generate.gender.as_deref(), Some("male"));
        assert_eq!(generate.tone.as_deref(), Some("happy"));
        assert_eq!(generate.theme.as_deref(), Some("middle ages"));
        assert_eq!(generate.sign.as_deref(), Some("Leo"));
        assert_eq!(generate.variant.as_deref(), Some("rich"));
        assert!(generate.copy);
        assert!(generate.format.is_none());
    }

    #[test]
    fn test_parse_list_subcommand() {
        let args = Args::parse_from(["zodiac-prompt", "list", "themes", "-v"]);
        match args.command {
            Some(Commands::List { category }) => assert_eq!(category.as_deref(), Some("themes")),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.verbosity, 1);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_validate_generate_args_output_dir() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            output_dir: Some(dir.path().join("prompts")),
            ..GenerateArgs::default()
        };
        assert!(validate_generate_args(&args).is_ok());
        assert!(!dir.path().join("prompts").exists());

        let file = dir.path().join("taken");
        std::fs::write(&file, "x").unwrap();
        let args = GenerateArgs {
            output_dir: Some(file),
            ..GenerateArgs::default()
        };
        assert!(validate_generate_args(&args).is_err());
    }

    #[test]
    fn test_validate_list_category() {
        assert!(validate_list_category(None).is_ok());
        assert!(validate_list_category(Some("signs")).is_ok());
        assert!(validate_list_category(Some("planets")).is_err());
    }
}
