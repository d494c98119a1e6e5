//! poe-price CLI
//!
//! Derives price keys from copied item text and looks them up in locally
//! downloaded price feeds.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use poe_price_core::PriceSource;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "poe-price")]
#[command(about = "Price-check copied Path of Exile items", long_about = None)]
struct Cli {
    /// More output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the price key of an item (reads stdin when FILE is omitted)
    Key {
        /// File holding the copied item text
        file: Option<PathBuf>,

        /// Price source whose gem buckets to use (defaults to the saved source)
        #[arg(long)]
        source: Option<PriceSource>,
    },

    /// Look an item up in the downloaded price feeds
    Price {
        /// File holding the copied item text
        file: Option<PathBuf>,

        /// Directory of `<Category>.json` feed files
        #[arg(long)]
        feeds: Option<PathBuf>,

        /// Price source the feed files came from (ninja or watch)
        #[arg(long)]
        source: Option<PriceSource>,
    },

    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the saved settings and the feed directory in use
    Show,

    /// Print the settings file path
    Path,

    /// Change saved settings
    Set {
        /// League whose prices to use
        #[arg(long)]
        league: Option<String>,

        /// Price source (ninja or watch)
        #[arg(long)]
        source: Option<PriceSource>,

        /// Feed directory, overriding the per-league cache directory
        #[arg(long, conflicts_with = "clear_feed_dir")]
        feed_dir: Option<PathBuf>,

        /// Forget the saved feed directory
        #[arg(long)]
        clear_feed_dir: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Key { file, source } => commands::key::run_key(file, source),
        Commands::Price {
            file,
            feeds,
            source,
        } => commands::price::run_price(file, feeds, source),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Set {
                league,
                source,
                feed_dir,
                clear_feed_dir,
            } => commands::config::run_config_set(league, source, feed_dir, clear_feed_dir),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Route `log` output to the terminal.
///
/// Info lines are the command's normal output and print bare; warnings and
/// errors get a coloured prefix. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            level => writeln!(
                buf,
                "{} {}",
                format!("[{level}]").if_supports_color(Stdout, |t| t.dimmed()),
                record.args()
            ),
        })
        .init();
}
