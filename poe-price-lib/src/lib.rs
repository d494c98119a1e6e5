//! Price tables, settings and price checks built on `poe-price-core`.

pub mod error;
pub mod price_table;
pub mod pricing;
pub mod settings;

pub use error::PriceError;
pub use price_table::{Entry, LoadSummary, PriceTable};
pub use pricing::{PriceCheck, price_check};
pub use settings::{Settings, default_feed_dir, settings_path};
