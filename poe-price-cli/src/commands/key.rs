use std::path::PathBuf;

use poe_price_core::{ParseOptions, PriceSource, parse_with};
use poe_price_lib::Settings;

use super::{print_key, read_item_text};
use crate::error::CliError;

/// Entry point for `key`.
pub(crate) fn run_key(file: Option<PathBuf>, source: Option<PriceSource>) -> Result<(), CliError> {
    let source = match source {
        Some(source) => source,
        None => Settings::load()?.source,
    };
    let text = read_item_text(file)?;
    let options = ParseOptions::new().policy(source.bucketing_policy());

    let key = parse_with(&text, &options)?;
    print_key(&key);
    log::debug!("{}", key.diagnostic());
    Ok(())
}
