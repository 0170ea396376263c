use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use zodiac_prompt_template::{Selection, TemplateVariant};

use crate::cli::args::{GenerateArgs, OutputFormat};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ZodiacPromptConfig {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub template: TemplateConfig,
}

/// Default category keys, matching the original form defaults
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SelectionConfig {
    #[serde(default = "default_gender")]
    pub gender: String,

    #[serde(default = "default_tone")]
    pub tone: String,

    #[serde(default = "default_theme")]
    pub theme: String,

    /// Sign key or "all"
    #[serde(default = "default_sign")]
    pub sign: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    /// "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,

    /// "classic" or "rich"
    #[serde(default = "default_variant")]
    pub variant: String,

    /// Copy the output to the clipboard
    #[serde(default)]
    pub copy: bool,

    pub output_dir: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Replacement fragment catalog (same schema as the built-in one)
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TemplateConfig {
    /// Custom template text; overrides output.variant
    pub custom: Option<String>,
}

fn default_gender() -> String {
    "female".to_string()
}

fn default_tone() -> String {
    "dark".to_string()
}

fn default_theme() -> String {
    "winter".to_string()
}

fn default_sign() -> String {
    "all".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_variant() -> String {
    "classic".to_string()
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            gender: default_gender(),
            tone: default_tone(),
            theme: default_theme(),
            sign: default_sign(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            variant: default_variant(),
            copy: false,
            output_dir: None,
        }
    }
}

/// Overlay one partial config layer onto another.
///
/// Every key present in `layer` wins, including keys set back to their
/// default value. Tables are merged key by key.
pub fn merge_layer(base: &mut toml::Value, layer: toml::Value) {
    match (base, layer) {
        (toml::Value::Table(base), toml::Value::Table(layer)) => {
            for (key, value) in layer {
                match base.get_mut(&key) {
                    Some(existing) => merge_layer(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, layer) => *base = layer,
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid path in {field}: {path} does not exist")]
    InvalidPath { field: String, path: PathBuf },

    #[error("Invalid value in {field}: '{value}' (expected {expected})")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ZodiacPromptConfig {
    pub fn generate_default_config() -> String {
        let default_config = Self::default();
        toml::to_string_pretty(&default_config).unwrap_or_else(|_| {
            r#"# zodiac-prompt configuration file

[selection]
gender = "female"
tone = "dark"
theme = "winter"
sign = "all"

[output]
format = "text"
variant = "classic"
copy = false
# output_dir = "prompts"

[catalog]
# path = "my-catalog.toml"

[template]
# custom = "portrait of a [gender_representation] born under [Zodiac Sign]"
"#
            .to_string()
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ZodiacPromptConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the user config file path (~/.config/zodiac-prompt/config.toml)
    pub fn get_user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/zodiac-prompt/config.toml"))
    }

    /// Get the system config file path (/etc/zodiac-prompt/config.toml)
    pub fn get_system_config_path() -> PathBuf {
        PathBuf::from("/etc/zodiac-prompt/config.toml")
    }

    /// Get the current directory config file path (./zodiac-prompt.toml)
    pub fn get_current_config_path() -> PathBuf {
        PathBuf::from("./zodiac-prompt.toml")
    }

    /// Parse one config file as a partial layer, checked against the schema.
    pub fn load_layer<P: AsRef<Path>>(path: P) -> Result<toml::Value, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let layer: toml::Value = toml::from_str(&content)?;
        let _checked: ZodiacPromptConfig = layer.clone().try_into()?;
        Ok(layer)
    }

    /// Build a config from partial layers; later layers win key by key.
    pub fn from_layers<I>(layers: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = toml::Value>,
    {
        let mut merged = toml::Value::Table(toml::map::Map::new());
        for layer in layers {
            merge_layer(&mut merged, layer);
        }
        let config: ZodiacPromptConfig = merged.try_into()?;
        Ok(config)
    }

    /// Load and merge configs from all sources with priority:
    /// 1. User config (~/.config/zodiac-prompt/config.toml) - lowest priority (base)
    /// 2. Current directory (./zodiac-prompt.toml)
    /// 3. System config (/etc/zodiac-prompt/config.toml) - highest priority
    pub fn load_with_merged_configs() -> Result<Self, ConfigError> {
        let mut candidates = Vec::new();
        if let Some(user_path) = Self::get_user_config_path() {
            candidates.push(user_path);
        }
        candidates.push(Self::get_current_config_path());
        candidates.push(Self::get_system_config_path());

        let mut layers = Vec::new();
        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_layer(&path) {
                Ok(layer) => {
                    tracing::debug!("Loaded config from: {}", path.display());
                    layers.push(layer);
                }
                Err(e) => {
                    tracing::warn!("Ignoring config {}: {}", path.display(), e);
                }
            }
        }

        Self::from_layers(layers)
    }

    pub fn apply_env_vars(&mut self, env_vars: &HashMap<String, String>) -> Result<()> {
        for (key, value) in env_vars {
            if let Some(config_key) = key.strip_prefix("ZODIAC_PROMPT_") {
                match config_key {
                    "SELECTION_GENDER" => self.selection.gender = value.clone(),
                    "SELECTION_TONE" => self.selection.tone = value.clone(),
                    "SELECTION_THEME" => self.selection.theme = value.clone(),
                    "SELECTION_SIGN" => self.selection.sign = value.clone(),
                    "OUTPUT_FORMAT" => self.output.format = value.clone(),
                    "OUTPUT_VARIANT" => self.output.variant = value.clone(),
                    "OUTPUT_COPY" => {
                        self.output.copy = value
                            .parse()
                            .map_err(|_| anyhow!("Invalid copy value: {}", value))?;
                    }
                    // OUTPUT_DIR is the short alias of OUTPUT_OUTPUT_DIR
                    "OUTPUT_OUTPUT_DIR" | "OUTPUT_DIR" => {
                        self.output.output_dir = Some(PathBuf::from(value))
                    }
                    "CATALOG_PATH" => self.catalog.path = Some(PathBuf::from(value)),
                    "TEMPLATE_CUSTOM" => self.template.custom = Some(value.clone()),
                    _ => {} // Ignore unknown environment variables
                }
            }
        }
        Ok(())
    }

    pub fn apply_generate_args(&mut self, args: &GenerateArgs) {
        if let Some(ref gender) = args.gender {
            self.selection.gender = gender.clone();
        }
        if let Some(ref tone) = args.tone {
            self.selection.tone = tone.clone();
        }
        if let Some(ref theme) = args.theme {
            self.selection.theme = theme.clone();
        }
        if let Some(ref sign) = args.sign {
            self.selection.sign = sign.clone();
        }
        if let Some(ref format) = args.format {
            self.output.format = format.clone();
        }
        if let Some(ref variant) = args.variant {
            self.output.variant = variant.clone();
        }
        if args.copy {
            self.output.copy = true;
        }
        if let Some(ref output_dir) = args.output_dir {
            self.output.output_dir = Some(output_dir.clone());
        }
        if let Some(ref catalog) = args.catalog {
            self.catalog.path = Some(catalog.clone());
        }
        if let Some(ref template) = args.template {
            self.template.custom = Some(template.clone());
        }
    }

    /// Load configuration with full precedence chain:
    /// 1. Default values (lowest)
    /// 2. Config files (see `load_with_merged_configs`), or only `config_path` when given
    /// 3. Environment variables (ZODIAC_PROMPT_*)
    /// 4. CLI arguments (highest)
    pub fn load_with_precedence(
        config_path: Option<&Path>,
        cli_args: &GenerateArgs,
        env_vars: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load_from_file(path)
                .map_err(|e| anyhow!("Failed to load config file {}: {}", path.display(), e))?,
            None => Self::load_with_merged_configs().unwrap_or_default(),
        };

        config.apply_env_vars(env_vars)?;
        config.apply_generate_args(cli_args);
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.format.parse::<OutputFormat>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "output.format".to_string(),
                value: self.output.format.clone(),
                expected: "text or json".to_string(),
            });
        }

        if self.output.variant.parse::<TemplateVariant>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "output.variant".to_string(),
                value: self.output.variant.clone(),
                expected: "classic or rich".to_string(),
            });
        }

        if let Some(ref path) = self.catalog.path {
            if !path.exists() {
                return Err(ConfigError::InvalidPath {
                    field: "catalog.path".to_string(),
                    path: path.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn selection(&self) -> Selection {
        Selection::new(
            self.selection.gender.clone(),
            self.selection.tone.clone(),
            self.selection.theme.clone(),
            self.selection.sign.clone(),
        )
    }

    /// Parsed output format; call after `validate`
    pub fn output_format(&self) -> OutputFormat {
        self.output.format.parse().unwrap_or_default()
    }

    /// Parsed template variant; call after `validate`
    pub fn variant(&self) -> TemplateVariant {
        self.output.variant.parse().unwrap_or_default()
    }
}
