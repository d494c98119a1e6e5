//! Item-text parsing and canonical price keys.
//!
//! Two entry points converge on one identity type, [`Key`]:
//! - [`parse`] / [`parse_with`] turn the game's "copy item" clipboard text
//!   into a key,
//! - [`normalize_feed_key`] turns one price-feed record into a key.
//!
//! Everything here is pure and synchronous; the only shared state is the
//! read-only [`VARIANTS`] table.

pub mod error;
pub mod feed;
pub mod frame;
pub mod gem;
pub mod header;
pub mod key;
pub mod links;
pub mod map_tier;
pub mod parser;
pub mod splitter;
pub mod variant;

pub use error::{NormalizeError, ParseError};
pub use feed::{
    FeedCategory, FeedOptions, FeedRecord, PriceSource, normalize_feed_key, normalize_feed_record,
};
pub use gem::{BucketingPolicy, GemAttributes};
pub use header::{Header, Rarity};
pub use key::{FrameType, Key, KeyBuilder};
pub use parser::{ParseOptions, parse, parse_with};
pub use splitter::ItemText;
pub use variant::{ModScan, VARIANTS, VariantEntry, VariantRule};
