use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "FREECELL_CONFIG";
pub const SEED_ENV: &str = "FREECELL_SEED";
pub const SHOW_MOVES_ENV: &str = "FREECELL_SHOW_MOVES";
pub const SYMBOLS_ENV: &str = "FREECELL_SYMBOLS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub show_moves: bool,
    pub symbols: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub show_moves: ValueSource,
    pub symbols: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            show_moves: ValueSource::Default,
            symbols: ValueSource::Default,
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
            seed: None,
            show_moves: true,
            symbols: crate::formatters::supports_unicode(),
        }
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Defaults, then the TOML file named by `FREECELL_CONFIG`, then environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.show_moves {
            cfg.show_moves = v;
            sources.show_moves = ValueSource::File;
        }
        if let Some(v) = f.symbols {
            cfg.symbols = v;
            sources.symbols = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(show) = std::env::var(SHOW_MOVES_ENV)
        && !show.is_empty()
    {
        cfg.show_moves = parse_bool(&show)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid show_moves '{}'", show)))?;
        sources.show_moves = ValueSource::Env;
    }
    if let Ok(symbols) = std::env::var(SYMBOLS_ENV)
        && !symbols.is_empty()
    {
        cfg.symbols = parse_bool(&symbols)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid symbols '{}'", symbols)))?;
        sources.symbols = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    show_moves: Option<bool>,
    #[serde(default)]
    symbols: Option<bool>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
