use poe_price_core::ParseError;
use poe_price_lib::PriceError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Loading prices or settings failed
    #[error("{0}")]
    Price(#[from] PriceError),

    /// Item text could not be parsed
    #[error("Cannot price this item: {0}")]
    Parse(#[from] ParseError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
