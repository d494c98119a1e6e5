use std::path::PathBuf;

use poe_price_core::{NormalizeError, ParseError};
use thiserror::Error;

/// Errors from loading price tables, settings, or running a price check.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings file exists but is not valid TOML for [`Settings`](crate::Settings).
    #[error("Cannot read settings {}: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Cannot write settings: {0}")]
    SettingsWrite(#[from] toml::ser::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// A feed document with a shape no provider uses.
    #[error("Invalid feed: {0}")]
    InvalidFeed(String),
}

impl PriceError {
    pub fn invalid_feed(msg: impl Into<String>) -> Self {
        Self::InvalidFeed(msg.into())
    }
}
