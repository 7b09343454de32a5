use serde::Deserialize;
use std::env::VarError;

use crate::errors::{ConfigError, OjisanError, Result};

/// Env var holding the whole config as a YAML document.
pub const CONFIG_ENV: &str = "OJISAN_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OjisanConfig {
    #[serde(default)]
    pub generator: TemplateOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplateOptions {
    /// Message layout. `{name}`, `{punctuation}` and `{emoji}` are substituted.
    pub template: String,
    /// Emojis are taken from this palette in order, wrapping around.
    pub emojis: Vec<String>,
    /// Repeated `punctuation_level` times.
    pub punctuation: String,
    /// Upper bound for either count in a single message.
    pub max_repeat: usize,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            template: "{name}チャン、元気カナ{punctuation}{emoji}".to_string(),
            emojis: vec![
                "😊".to_string(),
                "😘".to_string(),
                "💦".to_string(),
                "❗".to_string(),
            ],
            punctuation: "！".to_string(),
            max_repeat: 100,
        }
    }
}

/// Loads the config from `config_path` when given, otherwise from
/// [`CONFIG_ENV`], falling back to the defaults only when the variable is
/// absent.
pub fn load_config(config_path: Option<&str>) -> Result<OjisanConfig> {
    match config_path {
        Some(path) => OjisanConfig::from_file(path),
        None => match std::env::var(CONFIG_ENV) {
            Err(VarError::NotPresent) => Ok(OjisanConfig::default()),
            value => OjisanConfig::from_env_value(value),
        },
    }
}

impl OjisanConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            origin: path.to_string(),
            error: Box::new(e),
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(CONFIG_ENV))
    }

    fn from_env_value(value: std::result::Result<String, VarError>) -> Result<Self> {
        let config_str = value.map_err(|e| ConfigError::LoadFailed {
            origin: CONFIG_ENV.to_string(),
            error: Box::new(e),
        })?;
        Self::from_yaml_str(&config_str)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: OjisanConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let generator = &self.generator;
        if generator.template.is_empty() {
            return Err(validation_failed("Template cannot be empty"));
        }
        if !generator.template.contains("{name}") {
            return Err(ConfigError::Invalid {
                message: "Template must contain the {name} placeholder".to_string(),
            }
            .into());
        }
        if generator.emojis.is_empty() {
            return Err(validation_failed("Emoji palette cannot be empty"));
        }
        if generator.punctuation.is_empty() {
            return Err(validation_failed("Punctuation mark cannot be empty"));
        }
        if generator.max_repeat == 0 {
            return Err(validation_failed("max_repeat must be at least 1"));
        }
        Ok(())
    }
}

fn validation_failed(reason: &str) -> OjisanError {
    ConfigError::ValidationFailed {
        reason: reason.to_string(),
    }
    .into()
}
