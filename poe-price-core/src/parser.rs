//! Clipboard text → [`Key`].

use crate::error::ParseError;
use crate::frame::classify;
use crate::gem::{BucketingPolicy, extract_gem};
use crate::header::{Rarity, parse_header};
use crate::key::{FrameType, Key, KeyBuilder};
use crate::links::count_links;
use crate::map_tier::{extract_map_tier, map_base_name};
use crate::splitter::ItemText;
use crate::variant::resolve_variant;

/// Options that control how clipboard text is turned into a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Gem bucketing rules; must match the price source being queried.
    pub policy: BucketingPolicy,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: BucketingPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Parse clipboard text with default options.
///
/// # Examples
///
/// ```
/// use poe_price_core::{FrameType, parse};
///
/// let key = parse("Rarity: Currency\nChaos Orb\n--------\nStack Size: 3/10\n").unwrap();
/// assert_eq!(key.name(), "Chaos Orb");
/// assert_eq!(key.frame_type(), FrameType::Currency);
/// ```
pub fn parse(raw: &str) -> Result<Key, ParseError> {
    parse_with(raw, &ParseOptions::default())
}

/// Parse clipboard text into a pricing key.
///
/// Pure: identical text and options always produce equal keys.
pub fn parse_with(raw: &str, options: &ParseOptions) -> Result<Key, ParseError> {
    let text = ItemText::split(raw)?;
    let header = parse_header(text.header())?;
    let frame = classify(header.rarity, &text)?;

    if header.is_map_class() {
        let tier = extract_map_tier(&text);
        let name = match header.rarity {
            Rarity::Magic => map_base_name(&header.name).to_string(),
            _ => header.name,
        };
        log::debug!("{name}: map class, tier {tier:?}");
        return Ok(KeyBuilder::new(name, frame).map_tier(tier).build());
    }

    let builder = match frame {
        FrameType::Unique => {
            let variation = resolve_variant(&header.name, &text).map(String::from);
            KeyBuilder::new(header.name, frame)
                .type_line(header.type_line)
                .links(count_links(&text))
                .variation(variation)
        }
        FrameType::Gem => {
            let gem = extract_gem(&header.name, &text, options.policy)?;
            let type_line = header.type_line.or_else(|| Some(header.name.clone()));
            KeyBuilder::new(header.name, frame)
                .type_line(type_line)
                .gem(gem)
        }
        _ => KeyBuilder::new(header.name, frame).type_line(header.type_line),
    };

    let key = builder.build();
    log::debug!("parsed {}", key.diagnostic());
    Ok(key)
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
