use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_FETCH_URL: &str = "https://jsonplaceholder.typicode.com/todos";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_url")]
    pub url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { url: default_fetch_url() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_fetch_url() -> String { DEFAULT_FETCH_URL.to_string() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load from `CONFIG_PATH` (or `config.toml`); a missing file means defaults.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = if std::path::Path::new(&config_path()).exists() {
            load_default()?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.fetch.normalize()?;
        Ok(())
    }
}

impl FetchConfig {
    fn normalize(&mut self) -> Result<()> {
        let trimmed = self.url.trim();
        if trimmed.is_empty() {
            self.url = default_fetch_url();
            return Ok(());
        }
        let lower = trimmed.to_ascii_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("fetch.url must start with http:// or https://, got {trimmed}"));
        }
        self.url = trimmed.to_string();
        Ok(())
    }
}
