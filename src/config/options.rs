// src/config/options.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};

/// Everything the three stages read, grouped by stage.
/// Every field has a default, so a partial TOML file (or none) works.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub merge: MergeOptions,
    pub geocode: GeocodeOptions,
    pub dashboard: DashboardOptions,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeOptions {
    pub inputs: Vec<PathBuf>,
    pub join_key: String,
    pub output: PathBuf,
    /// Column renames applied after the join (source name → entity id).
    pub rename: BTreeMap<String, String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        let raw = PathBuf::from(DEFAULT_RAW_DIR);
        Self {
            inputs: DEFAULT_TRAFFIC_INPUTS.iter().map(|f| raw.join(f)).collect(),
            join_key: s!(JOIN_KEY),
            output: PathBuf::from(DEFAULT_PROCESSED_DIR).join(DEFAULT_TRAFFIC_FILE),
            rename: BTreeMap::from([(s!(VISITS_COLUMN), s!(VISITS_RENAMED_TO))]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeocodeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Leading junk rows dropped from the raw dump.
    pub skip_rows: usize,
    /// Number of separating commas; a line yields `split_limit + 1` fields.
    pub split_limit: usize,
    /// Field that keeps any surplus commas (the address).
    pub address_field: usize,
    pub delay_ms: u64,
    pub endpoint: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for GeocodeOptions {
    fn default() -> Self {
        let processed = PathBuf::from(DEFAULT_PROCESSED_DIR);
        Self {
            input: processed.join(DEFAULT_STORE_DUMP),
            output: processed.join(DEFAULT_STORE_FILE),
            skip_rows: SKIP_ROWS,
            split_limit: SPLIT_LIMIT,
            address_field: ADDRESS_FIELD,
            delay_ms: REQUEST_PAUSE_MS,
            endpoint: s!(GEOCODE_URL),
            api_key_env: s!(API_KEY_ENV),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl GeocodeOptions {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        match std::env::var(&self.api_key_env) {
            Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
            _ => Err(Error::MissingApiKey(self.api_key_env.clone())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardOptions {
    pub traffic: PathBuf,
    pub stores: PathBuf,
    pub title: String,
    pub subtitle: String,
    /// How many entities the Compare tab preselects.
    pub compare_default: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        let processed = PathBuf::from(DEFAULT_PROCESSED_DIR);
        Self {
            traffic: processed.join(DEFAULT_TRAFFIC_FILE),
            stores: processed.join(DEFAULT_STORE_FILE),
            title: s!(APP_TITLE),
            subtitle: s!(APP_SUBTITLE),
            compare_default: COMPARE_DEFAULT,
        }
    }
}

impl PipelineConfig {
    /// Resolve and load the config:
    /// explicit path, then `$PRESENCE_CONFIG`, then `./presence.toml`, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            return Self::from_file(p);
        }
        if let Ok(p) = std::env::var(CONFIG_ENV) {
            if !p.trim().is_empty() {
                return Self::from_file(Path::new(p.trim()));
            }
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(local);
        }
        logd!("Config: no file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let cfg = Self::from_toml(&text)?;
        logf!("Config: loaded {}", path.display());
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.merge.join_key.trim().is_empty() {
            return Err(Error::Config(s!("merge.join_key must not be empty")));
        }
        let g = &self.geocode;
        if g.split_limit + 1 != STORE_DUMP_FIELDS {
            return Err(Error::Config(format!(
                "geocode.split_limit must be {} (Store, Address, Phone Number, Type), got {}",
                STORE_DUMP_FIELDS - 1,
                g.split_limit
            )));
        }
        if g.address_field > g.split_limit {
            return Err(Error::Config(format!(
                "geocode.address_field ({}) is past the last field (split_limit = {})",
                g.address_field, g.split_limit
            )));
        }
        Ok(())
    }
}
