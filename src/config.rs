//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or an explicit path), then applies `BLOCKPAY_LOG_LEVEL` and
//! `BLOCKPAY_SEED` overrides.

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::error::AppError;
use crate::logger;
use crate::mock_data::DatasetSize;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Where records come from and how big the synthetic dataset is.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub size: DatasetSize,
    /// Fixed RNG seed; `None` draws a fresh dataset every run.
    pub seed: Option<u64>,
    /// When set, transactions are read from this CSV instead of generated.
    pub transactions_csv: Option<PathBuf>,
    /// When set, users are read from this CSV instead of generated.
    pub users_csv: Option<PathBuf>,
    /// Artificial delay before answering a request.
    pub simulated_latency: Duration,
}

impl DatasetConfig {
    /// Seeded when `seed` is set, so data and dashboard figures repeat across runs.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub default_page_size: i64,
    pub log_level: String,
    pub admin_email: String,
}

#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    dataset: RawDataset,
    #[serde(default)]
    query: RawQuery,
    #[serde(default)]
    logging: RawLogging,
    #[serde(default)]
    session: RawSession,
}

#[derive(Deserialize)]
struct RawDataset {
    #[serde(default = "default_transactions")]
    transactions: usize,
    #[serde(default = "default_users")]
    users: usize,
    #[serde(default = "default_contract_logs")]
    contract_logs: usize,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    transactions_csv: Option<String>,
    #[serde(default)]
    users_csv: Option<String>,
    #[serde(default)]
    simulated_latency_ms: u64,
}

impl Default for RawDataset {
    fn default() -> Self {
        Self {
            transactions: default_transactions(),
            users: default_users(),
            contract_logs: default_contract_logs(),
            seed: None,
            transactions_csv: None,
            users_csv: None,
            simulated_latency_ms: 0,
        }
    }
}

#[derive(Deserialize)]
struct RawQuery {
    #[serde(default = "default_page_size")]
    default_page_size: i64,
}

impl Default for RawQuery {
    fn default() -> Self {
        Self { default_page_size: default_page_size() }
    }
}

#[derive(Deserialize)]
struct RawLogging {
    #[serde(default = "default_log_level")]
    level: String,
}

impl Default for RawLogging {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

#[derive(Deserialize)]
struct RawSession {
    #[serde(default = "default_admin_email")]
    admin_email: String,
}

impl Default for RawSession {
    fn default() -> Self {
        Self { admin_email: default_admin_email() }
    }
}

fn default_transactions() -> usize { DatasetSize::default().transactions }
fn default_users() -> usize { DatasetSize::default().users }
fn default_contract_logs() -> usize { DatasetSize::default().contract_logs }
fn default_page_size() -> i64 { 10 }
fn default_log_level() -> String { "info".to_string() }
fn default_admin_email() -> String { "admin@blockpay.io".to_string() }

/// Environment overrides, collected once so tests can pass them directly.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub seed: Option<String>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Overrides {
            log_level: env::var("BLOCKPAY_LOG_LEVEL").ok(),
            seed: env::var("BLOCKPAY_SEED").ok(),
        }
    }
}

/// Load config from `path` (default `config/default.toml`), then apply env-var overrides.
pub fn load(path: Option<&Path>) -> Result<Config, AppError> {
    load_from(
        path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH)),
        &Overrides::from_env(),
    )
}

pub fn load_from(path: &Path, overrides: &Overrides) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    parse(&raw, overrides)
        .map_err(|e| match e {
            AppError::Config(msg) => AppError::Config(format!("{} in {}", msg, path.display())),
            other => other,
        })
}

/// Resolve a TOML document. Missing sections fall back to defaults.
pub fn parse(raw: &str, overrides: &Overrides) -> Result<Config, AppError> {
    let parsed: RawConfig =
        toml::from_str(raw).map_err(|e| AppError::Config(format!("parse error: {e}")))?;

    let log_level = overrides
        .log_level
        .clone()
        .unwrap_or(parsed.logging.level);
    logger::parse_level(&log_level)?;

    let seed = match overrides.seed.as_deref() {
        Some(text) => Some(
            text.parse::<u64>()
                .map_err(|e| AppError::Config(format!("invalid BLOCKPAY_SEED '{text}': {e}")))?,
        ),
        None => parsed.dataset.seed,
    };

    if parsed.query.default_page_size < 1 {
        return Err(AppError::Config(format!(
            "query.default_page_size must be at least 1, got {}",
            parsed.query.default_page_size
        )));
    }

    let d = parsed.dataset;
    Ok(Config {
        dataset: DatasetConfig {
            size: DatasetSize {
                transactions: d.transactions,
                users: d.users,
                contract_logs: d.contract_logs,
            },
            seed,
            transactions_csv: d.transactions_csv.map(PathBuf::from),
            users_csv: d.users_csv.map(PathBuf::from),
            simulated_latency: Duration::from_millis(d.simulated_latency_ms),
        },
        default_page_size: parsed.query.default_page_size,
        log_level,
        admin_email: parsed.session.admin_email,
    })
}
