use holdem_engine::errors::GameError;
use holdem_engine::round::SettlementRule;
use holdem_engine::table::{DEFAULT_BIG_BLIND, DEFAULT_SEATS, TableConfig};
use serde::{Deserialize, Serialize};
use std::fs;

/// Table settings as the CLI sees them. `dealer` is a 1-based seat number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seats: usize,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub dealer: Option<usize>,
    pub settlement: SettlementRule,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seats: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub dealer: ValueSource,
    pub settlement: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seats: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            dealer: ValueSource::Default,
            settlement: ValueSource::Default,
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
            seats: DEFAULT_SEATS,
            big_blind: DEFAULT_BIG_BLIND,
            seed: None,
            dealer: None,
            settlement: SettlementRule::Strict,
        }
    }
}

impl Config {
    /// Engine configuration for these settings.
    pub fn table_config(&self) -> Result<TableConfig, ConfigError> {
        let dealer = match self.dealer {
            Some(0) => {
                return Err(ConfigError::Invalid(
                    "dealer seat numbers start at 1".into(),
                ));
            }
            Some(n) => Some(n - 1),
            None => None,
        };
        let table = TableConfig {
            seat_count: self.seats,
            big_blind: self.big_blind,
            dealer,
            seed: self.seed,
            settlement: self.settlement,
        };
        table.validate().map_err(|e| match e {
            GameError::InvalidConfig(msg) => ConfigError::Invalid(msg),
            other => ConfigError::Invalid(other.to_string()),
        })?;
        Ok(table)
    }
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides {
    pub seats: Option<usize>,
    pub big_blind: Option<u32>,
    pub seed: Option<u64>,
    pub dealer: Option<usize>,
    pub settlement: Option<SettlementRule>,
}

impl ConfigResolved {
    pub fn apply_flags(mut self, flags: &FlagOverrides) -> Self {
        if let Some(v) = flags.seats {
            self.config.seats = v;
            self.sources.seats = ValueSource::Flag;
        }
        if let Some(v) = flags.big_blind {
            self.config.big_blind = v;
            self.sources.big_blind = ValueSource::Flag;
        }
        if let Some(v) = flags.seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Flag;
        }
        if let Some(v) = flags.dealer {
            self.config.dealer = Some(v);
            self.sources.dealer = ValueSource::Flag;
        }
        if let Some(v) = flags.settlement {
            self.config.settlement = v;
            self.sources.settlement = ValueSource::Flag;
        }
        self
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

/// Resolves the configuration: defaults, then the TOML file named by
/// `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seats {
            cfg.seats = v;
            sources.seats = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.dealer {
            cfg.dealer = Some(v);
            sources.dealer = ValueSource::File;
        }
        if let Some(v) = f.settlement {
            cfg.settlement = v;
            sources.settlement = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HOLDEM_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(seats) = std::env::var("HOLDEM_SEATS")
        && !seats.is_empty()
    {
        cfg.seats = seats
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid seats".into()))?;
        sources.seats = ValueSource::Env;
    }
    if let Ok(bb) = std::env::var("HOLDEM_BIG_BLIND")
        && !bb.is_empty()
    {
        cfg.big_blind = bb
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid big_blind".into()))?;
        sources.big_blind = ValueSource::Env;
    }
    if let Ok(rule) = std::env::var("HOLDEM_SETTLEMENT")
        && !rule.is_empty()
    {
        cfg.settlement = parse_settlement(&rule)
            .ok_or_else(|| ConfigError::Invalid("Invalid settlement".into()))?;
        sources.settlement = ValueSource::Env;
    }

    cfg.table_config()?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seats: Option<usize>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    dealer: Option<usize>,
    #[serde(default)]
    settlement: Option<SettlementRule>,
}

fn parse_settlement(s: &str) -> Option<SettlementRule> {
    match s.to_ascii_lowercase().replace('_', "-").as_str() {
        "strict" => Some(SettlementRule::Strict),
        "active-seats" | "active" => Some(SettlementRule::ActiveSeats),
        _ => None,
    }
}
