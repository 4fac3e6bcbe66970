use std::fmt;

use crate::consts;
use crate::errors::RelayError;

#[derive(Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub api_url: String,
    pub api_key: Option<String>,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gemini: GeminiConfig,
    pub instructions: String,
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, RelayError>;
}

/// Reads configuration from the process environment. `.env` is expected to
/// have been applied by the caller.
pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, RelayError> {
        config_from_vars(|name| std::env::var(name).ok())
    }
}

pub fn config_from_vars<F>(var: F) -> Result<Config, RelayError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| var(name).filter(|value| !value.trim().is_empty());

    let port = match non_empty("PORT") {
        Some(port) => port
            .trim()
            .parse::<u16>()
            .map_err(|e| RelayError::ConfigError(format!("invalid PORT {port:?}: {e}")))?,
        None => consts::DEFAULT_PORT,
    };

    Ok(Config {
        host: non_empty("HOST").unwrap_or_else(|| consts::DEFAULT_HOST.to_string()),
        port,
        gemini: GeminiConfig {
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| consts::DEFAULT_MODEL.to_string()),
            api_url: non_empty("GEMINI_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| consts::DEFAULT_API_URL.to_string()),
            api_key: var("GEMINI_API_KEY").and_then(|raw| clean_api_key(&raw)),
        },
        instructions: consts::INSTRUCTION_TEMPLATE.to_string(),
    })
}

pub fn load_config() -> Result<Config, RelayError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}

/// Strips stray quote characters and whitespace that often end up in `.env`
/// values. Returns `None` when nothing usable is left.
pub fn clean_api_key(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|c| *c != '"' && *c != '\'').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 9 {
        return "***".to_string();
    }
    let head: String = chars[..5].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
