//! Persisted user settings (league, price source, feed directory).
//!
//! The settings file is always `~/.config/poe-price/settings.toml`. A missing
//! file means defaults; keys this version does not know about are kept on
//! save so older and newer front ends can share one file.

use std::path::{Path, PathBuf};

use poe_price_core::{FeedOptions, ParseOptions, PriceSource};
use serde::{Deserialize, Serialize};

use crate::error::PriceError;

/// League used when none is configured.
pub const DEFAULT_LEAGUE: &str = "Standard";

/// Canonical path to the settings file: `~/.config/poe-price/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("poe-price").join("settings.toml")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub league: String,
    pub source: PriceSource,
    /// Directory holding the downloaded `<Category>.json` feed files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_dir: Option<PathBuf>,
    #[serde(flatten)]
    extra: toml::Table,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            league: DEFAULT_LEAGUE.to_string(),
            source: PriceSource::default(),
            feed_dir: None,
            extra: toml::Table::new(),
        }
    }
}

impl Settings {
    /// Load from [`settings_path`].
    pub fn load() -> Result<Self, PriceError> {
        Self::load_from(&settings_path())
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, PriceError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents).map_err(|source| PriceError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self) -> Result<(), PriceError> {
        self.save_to(&settings_path())
    }

    /// Write atomically to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), PriceError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        log::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Resolve the feed directory using a priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. Saved `feed_dir`
    /// 3. `<cache dir>/poe-price/<league>`
    pub fn resolve_feed_dir(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.feed_dir.clone())
            .unwrap_or_else(|| default_feed_dir(&self.league))
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new().policy(self.source.bucketing_policy())
    }

    pub fn feed_options(&self) -> FeedOptions {
        FeedOptions::new(self.source)
    }
}

/// Per-league feed cache directory.
pub fn default_feed_dir(league: &str) -> PathBuf {
    let cache = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache.join("poe-price").join(league)
}
