pub(crate) mod config;
pub(crate) mod key;
pub(crate) mod price;

use std::io::Read;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use poe_price_core::Key;

use crate::error::CliError;

/// Item text from `file`, or stdin when no file is given.
pub(crate) fn read_item_text(file: Option<PathBuf>) -> Result<String, CliError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Print a key's label followed by its populated fields.
pub(crate) fn print_key(key: &Key) {
    log::info!("{}", key.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  {:<12} {}", "frame:", key.frame_type());
    if let Some(level) = key.gem_level() {
        log::info!("  {:<12} {}", "gem level:", level);
    }
    if let Some(quality) = key.gem_quality() {
        log::info!("  {:<12} {}%", "gem quality:", quality);
    }
    if key.gem_corrupted() == Some(true) {
        log::info!(
            "  {:<12} {}",
            "corrupted:",
            "yes".if_supports_color(Stdout, |t| t.red())
        );
    }
    if let Some(links) = key.links() {
        log::info!("  {:<12} {}", "links:", links);
    }
    if let Some(tier) = key.map_tier() {
        log::info!("  {:<12} {}", "map tier:", tier);
    }
}
