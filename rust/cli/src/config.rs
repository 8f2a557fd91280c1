use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "POTSETTLE_CONFIG";
pub const SEED_ENV: &str = "POTSETTLE_SEED";
pub const BB_SIZE_ENV: &str = "POTSETTLE_BB_SIZE";
pub const STARTING_STACK_ENV: &str = "POTSETTLE_STARTING_STACK";
pub const LOG_ENV: &str = "POTSETTLE_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub bb_size: u32,
    pub starting_stack: u32,
    pub seed: Option<u64>,
    pub log_filter: String,
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
    pub bb_size: ValueSource,
    pub starting_stack: ValueSource,
    pub seed: ValueSource,
    pub log_filter: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            bb_size: ValueSource::Default,
            starting_stack: ValueSource::Default,
            seed: ValueSource::Default,
            log_filter: ValueSource::Default,
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
            bb_size: 40,
            starting_stack: 1_000,
            seed: None,
            log_filter: "warn".into(),
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

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.bb_size {
            cfg.bb_size = v;
            sources.bb_size = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log_filter {
            cfg.log_filter = v;
            sources.log_filter = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(bb) = std::env::var(BB_SIZE_ENV)
        && !bb.is_empty()
    {
        cfg.bb_size = bb
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid bb_size: {}", bb)))?;
        sources.bb_size = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var(STARTING_STACK_ENV)
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting_stack: {}", stack)))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(filter) = std::env::var(LOG_ENV)
        && !filter.is_empty()
    {
        cfg.log_filter = filter;
        sources.log_filter = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    bb_size: Option<u32>,
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_filter: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.bb_size == 0 {
        return Err(ConfigError::Invalid("bb_size must be >0".into()));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid("starting_stack must be >0".into()));
    }
    Ok(())
}
