use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use poe_price_core::PriceSource;
use poe_price_lib::{PriceTable, Settings, price_check};

use super::{print_key, read_item_text};
use crate::error::CliError;

/// Entry point for `price`.
pub(crate) fn run_price(
    file: Option<PathBuf>,
    feeds: Option<PathBuf>,
    source: Option<PriceSource>,
) -> Result<(), CliError> {
    let mut settings = Settings::load()?;
    if let Some(source) = source {
        settings.source = source;
    }

    let feed_dir = settings.resolve_feed_dir(feeds);
    if !feed_dir.is_dir() {
        return Err(CliError::config(format!(
            "no feed directory at {}; pass --feeds or run 'poe-price config set --feed-dir <DIR>'",
            feed_dir.display()
        )));
    }

    log::debug!(
        "Loading {} prices for {} from {}",
        settings.source.display_name(),
        settings.league,
        feed_dir.display()
    );
    let (table, summary) = PriceTable::load_dir(&feed_dir, &settings.feed_options())?;
    if summary.skipped > 0 {
        log::warn!("{} feed lines could not be used", summary.skipped);
    }

    let text = read_item_text(file)?;
    let check = price_check(&text, &table, &settings.parse_options())?;

    print_key(&check.key);
    match check.entry {
        Some(entry) => log::info!(
            "  {:<12} {} chaos ({} listed)",
            "price:",
            format!("{:.1}", entry.value).if_supports_color(Stdout, |t| t.green()),
            entry.quantity
        ),
        None => log::info!(
            "  {:<12} {}",
            "price:",
            "not found".if_supports_color(Stdout, |t| t.yellow())
        ),
    }
    Ok(())
}
