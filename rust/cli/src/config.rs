use serde::{Deserialize, Serialize};
use std::fs;

use handlog_engine::names::normalize_name;
use handlog_engine::session::{DEFAULT_BIG_BLIND, ParseOptions};

use crate::error::CliError;

/// Layout of a saved record collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One pretty-printed JSON array
    Json,
    /// One compact record per line
    Jsonl,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "jsonl" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub hero: Option<String>,
    pub default_big_blind: u64,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub hero: ValueSource,
    pub default_big_blind: ValueSource,
    pub format: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            hero: ValueSource::Default,
            default_big_blind: ValueSource::Default,
            format: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hero: None,
            default_big_blind: DEFAULT_BIG_BLIND,
            format: OutputFormat::Json,
        }
    }
}

impl Config {
    /// The configured hero, or a configuration error naming how to set one.
    pub fn require_hero(&self) -> Result<&str, CliError> {
        self.hero.as_deref().ok_or_else(|| {
            CliError::Config(
                "hero identity required (use --hero, HANDLOG_HERO or the config file)".into(),
            )
        })
    }

    pub fn parse_options(&self) -> Result<ParseOptions, CliError> {
        let hero = self.require_hero()?;
        Ok(ParseOptions::new(hero).with_default_big_blind(self.default_big_blind))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(format!("Invalid configuration: {}", e))
    }
}

/// Command-line values that take precedence over every other source.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub hero: Option<String>,
    pub default_big_blind: Option<u64>,
    pub format: Option<OutputFormat>,
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_overrides(&CliOverrides::default())
}

pub fn load_with_overrides(overrides: &CliOverrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HANDLOG_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.hero {
            cfg.hero = Some(v);
            sources.hero = ValueSource::File;
        }
        if let Some(v) = f.default_big_blind {
            cfg.default_big_blind = v;
            sources.default_big_blind = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
    }

    if let Ok(hero) = std::env::var("HANDLOG_HERO")
        && !hero.is_empty()
    {
        cfg.hero = Some(hero);
        sources.hero = ValueSource::Env;
    }
    if let Ok(bb) = std::env::var("HANDLOG_DEFAULT_BB")
        && !bb.is_empty()
    {
        cfg.default_big_blind = bb
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid default big blind".into()))?;
        sources.default_big_blind = ValueSource::Env;
    }
    if let Ok(fmt) = std::env::var("HANDLOG_FORMAT")
        && !fmt.is_empty()
    {
        cfg.format =
            OutputFormat::parse(&fmt).ok_or_else(|| ConfigError::Invalid("Invalid format".into()))?;
        sources.format = ValueSource::Env;
    }

    if let Some(hero) = &overrides.hero {
        cfg.hero = Some(hero.clone());
        sources.hero = ValueSource::Cli;
    }
    if let Some(bb) = overrides.default_big_blind {
        cfg.default_big_blind = bb;
        sources.default_big_blind = ValueSource::Cli;
    }
    if let Some(fmt) = overrides.format {
        cfg.format = fmt;
        sources.format = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    hero: Option<String>,
    #[serde(default)]
    default_big_blind: Option<u64>,
    #[serde(default)]
    format: Option<OutputFormat>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.default_big_blind == 0 {
        return Err(ConfigError::Invalid(
            "default_big_blind must be >0".into(),
        ));
    }
    if let Some(hero) = &cfg.hero
        && normalize_name(hero).is_empty()
    {
        return Err(ConfigError::Invalid(
            "hero must not be empty".into(),
        ));
    }
    Ok(())
}
