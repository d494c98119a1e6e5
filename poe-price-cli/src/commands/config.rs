use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use poe_price_core::PriceSource;
use poe_price_lib::{Settings, settings_path};

use crate::error::CliError;

/// Show saved settings and where the feed directory resolves to.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = Settings::load()?;

    log::info!(
        "{}",
        "poe-price Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    log::info!("  {:<10} {}", "league:", settings.league);
    log::info!(
        "  {:<10} {} ({})",
        "source:",
        settings.source,
        settings.source.display_name()
    );

    let feed_dir = settings.resolve_feed_dir(None);
    let origin = if settings.feed_dir.is_some() {
        "(saved)"
    } else {
        "(default)"
    };
    let status = if feed_dir.is_dir() {
        "".to_string()
    } else {
        format!(" {}", "(missing)".if_supports_color(Stdout, |t| t.red()))
    };
    log::info!(
        "  {:<10} {} {}{}",
        "feeds:",
        feed_dir.display().if_supports_color(Stdout, |t| t.cyan()),
        origin.if_supports_color(Stdout, |t| t.dimmed()),
        status,
    );
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Update and save settings.
pub(crate) fn run_config_set(
    league: Option<String>,
    source: Option<PriceSource>,
    feed_dir: Option<PathBuf>,
    clear_feed_dir: bool,
) -> Result<(), CliError> {
    if league.is_none() && source.is_none() && feed_dir.is_none() && !clear_feed_dir {
        return Err(CliError::config(
            "nothing to set; pass --league, --source, --feed-dir or --clear-feed-dir",
        ));
    }

    let mut settings = Settings::load()?;
    if let Some(league) = league {
        let league = league.trim();
        if league.is_empty() {
            return Err(CliError::config("league cannot be empty"));
        }
        settings.league = league.to_string();
    }
    if let Some(source) = source {
        settings.source = source;
    }
    if let Some(dir) = feed_dir {
        settings.feed_dir = Some(dir);
    }
    if clear_feed_dir {
        settings.feed_dir = None;
    }

    settings.save()?;
    log::info!(
        "{} Saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings_path().display()
    );
    Ok(())
}
