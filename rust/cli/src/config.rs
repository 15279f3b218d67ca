use keno_engine::paytable::Preset;
use keno_engine::session::{BET_OPTIONS, CARD_COUNT_RANGE, STARTING_BANKROLL};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_bankroll: u64,
    pub cards: usize,
    pub bet_per_card: u32,
    pub preset: Preset,
    pub seed: Option<u64>,
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
    pub starting_bankroll: ValueSource,
    pub cards: ValueSource,
    pub bet_per_card: ValueSource,
    pub preset: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_bankroll: ValueSource::Default,
            cards: ValueSource::Default,
            bet_per_card: ValueSource::Default,
            preset: ValueSource::Default,
            seed: ValueSource::Default,
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
            starting_bankroll: STARTING_BANKROLL,
            cards: 1,
            bet_per_card: 1,
            preset: Preset::Fun,
            seed: None,
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("KENO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_bankroll {
            cfg.starting_bankroll = v;
            sources.starting_bankroll = ValueSource::File;
        }
        if let Some(v) = f.cards {
            cfg.cards = v;
            sources.cards = ValueSource::File;
        }
        if let Some(v) = f.bet_per_card {
            cfg.bet_per_card = v;
            sources.bet_per_card = ValueSource::File;
        }
        if let Some(v) = f.preset {
            cfg.preset = parse_preset(&v)?;
            sources.preset = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(v) = env_value("KENO_BANKROLL") {
        cfg.starting_bankroll = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bankroll".into()))?;
        sources.starting_bankroll = ValueSource::Env;
    }
    if let Some(v) = env_value("KENO_CARDS") {
        cfg.cards = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid card count".into()))?;
        sources.cards = ValueSource::Env;
    }
    if let Some(v) = env_value("KENO_BET") {
        cfg.bet_per_card = v
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet".into()))?;
        sources.bet_per_card = ValueSource::Env;
    }
    if let Some(v) = env_value("KENO_PRESET") {
        cfg.preset = parse_preset(&v)?;
        sources.preset = ValueSource::Env;
    }
    if let Some(v) = env_value("KENO_SEED") {
        cfg.seed = Some(
            v.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
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
    starting_bankroll: Option<u64>,
    #[serde(default)]
    cards: Option<usize>,
    #[serde(default)]
    bet_per_card: Option<u32>,
    #[serde(default)]
    preset: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_preset(name: &str) -> Result<Preset, ConfigError> {
    Preset::from_name(name).map_err(|e| ConfigError::Invalid(e.to_string()))
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_bankroll == 0 {
        return Err(ConfigError::Invalid(
            "starting_bankroll must be >0".into(),
        ));
    }
    if !CARD_COUNT_RANGE.contains(&cfg.cards) {
        return Err(ConfigError::Invalid(
            "cards must be between 1 and 8".into(),
        ));
    }
    if !BET_OPTIONS.contains(&cfg.bet_per_card) {
        return Err(ConfigError::Invalid(
            "bet_per_card must be one of 1, 2, 5, 10".into(),
        ));
    }
    Ok(())
}
