//! The canonical pricing identity of an item.
//!
//! A [`Key`] is produced either from clipboard text ([`crate::parse`]) or from
//! a price-feed record ([`crate::normalize_feed_key`]). Both paths go through
//! [`KeyBuilder`], which drops every field that has no meaning for the
//! resolved [`FrameType`], so the two sources agree field-for-field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gem::GemAttributes;

/// The game's rarity/category tier, which decides which attributes matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameType {
    Normal,
    Magic,
    Rare,
    Unique,
    Gem,
    Currency,
    /// Map fragments and maps.
    Fragment,
    DivinationCard,
    Prophecy,
    Relic,
}

const ALL_FRAME_TYPES: &[FrameType] = &[
    FrameType::Normal,
    FrameType::Magic,
    FrameType::Rare,
    FrameType::Unique,
    FrameType::Gem,
    FrameType::Currency,
    FrameType::Fragment,
    FrameType::DivinationCard,
    FrameType::Prophecy,
    FrameType::Relic,
];

impl FrameType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Magic => "Magic",
            Self::Rare => "Rare",
            Self::Unique => "Unique",
            Self::Gem => "Gem",
            Self::Currency => "Currency",
            Self::Fragment => "Fragment/Map",
            Self::DivinationCard => "Divination Card",
            Self::Prophecy => "Prophecy",
            Self::Relic => "Relic",
        }
    }

    /// Normal, Magic and Rare are priced as one family.
    pub fn is_normal_family(&self) -> bool {
        matches!(self, Self::Normal | Self::Magic | Self::Rare)
    }

    /// Whether socket links and named variants distinguish prices.
    pub fn carries_variants(&self) -> bool {
        matches!(self, Self::Unique | Self::Relic)
    }

    /// Whether a map tier distinguishes prices.
    pub fn carries_map_tier(&self) -> bool {
        self.is_normal_family() || matches!(self, Self::Unique | Self::Relic | Self::Fragment)
    }

    pub fn all() -> &'static [FrameType] {
        ALL_FRAME_TYPES
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Canonical item identity used as the price-table key.
///
/// Fields are private: a key is immutable once built, and can only be built
/// through [`KeyBuilder`]. Equality and hashing cover every field, with
/// `None` equal only to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    name: String,
    type_line: Option<String>,
    frame_type: FrameType,
    variation: Option<String>,
    links: Option<u8>,
    map_tier: Option<u8>,
    gem_level: Option<u8>,
    gem_quality: Option<u8>,
    gem_corrupted: Option<bool>,
}

impl Key {
    pub fn builder(name: impl Into<String>, frame_type: FrameType) -> KeyBuilder {
        KeyBuilder::new(name, frame_type)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_line(&self) -> Option<&str> {
        self.type_line.as_deref()
    }

    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }

    pub fn variation(&self) -> Option<&str> {
        self.variation.as_deref()
    }

    pub fn links(&self) -> Option<u8> {
        self.links
    }

    pub fn map_tier(&self) -> Option<u8> {
        self.map_tier
    }

    pub fn gem_level(&self) -> Option<u8> {
        self.gem_level
    }

    pub fn gem_quality(&self) -> Option<u8> {
        self.gem_quality
    }

    pub fn gem_corrupted(&self) -> Option<bool> {
        self.gem_corrupted
    }

    /// Full diagnostic label listing every populated field.
    ///
    /// Meant for logs only; nothing parses it back.
    pub fn diagnostic(&self) -> String {
        let mut parts = vec![
            format!("name={}", self.name),
            format!("frameType={:?}", self.frame_type),
        ];
        if let Some(ref type_line) = self.type_line {
            parts.push(format!("typeLine={type_line}"));
        }
        if let Some(ref variation) = self.variation {
            parts.push(format!("variation={variation}"));
        }
        if let Some(links) = self.links {
            parts.push(format!("links={links}"));
        }
        if let Some(tier) = self.map_tier {
            parts.push(format!("mapTier={tier}"));
        }
        if let Some(level) = self.gem_level {
            parts.push(format!("gemLevel={level}"));
        }
        if let Some(quality) = self.gem_quality {
            parts.push(format!("gemQuality={quality}"));
        }
        if let Some(corrupted) = self.gem_corrupted {
            parts.push(format!("gemCorrupted={corrupted}"));
        }
        format!("Key {{ {} }}", parts.join(", "))
    }
}

/// Short human label: `Name, TypeLine (Variation)`.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(ref type_line) = self.type_line {
            write!(f, ", {type_line}")?;
        }
        if let Some(ref variation) = self.variation {
            write!(f, " ({variation})")?;
        }
        Ok(())
    }
}

/// Assembles a [`Key`] from whatever the gated extractors produced.
///
/// Setters never overwrite with a guess: passing `None` leaves the field
/// absent. [`build`](Self::build) strips fields the frame type does not
/// carry and link counts below five.
#[derive(Debug, Clone)]
pub struct KeyBuilder {
    key: Key,
}

impl KeyBuilder {
    pub fn new(name: impl Into<String>, frame_type: FrameType) -> Self {
        Self {
            key: Key {
                name: name.into(),
                type_line: None,
                frame_type,
                variation: None,
                links: None,
                map_tier: None,
                gem_level: None,
                gem_quality: None,
                gem_corrupted: None,
            },
        }
    }

    pub fn type_line(mut self, type_line: Option<String>) -> Self {
        self.key.type_line = type_line;
        self
    }

    pub fn variation(mut self, variation: Option<String>) -> Self {
        self.key.variation = variation;
        self
    }

    pub fn links(mut self, links: Option<u8>) -> Self {
        self.key.links = links;
        self
    }

    pub fn map_tier(mut self, map_tier: Option<u8>) -> Self {
        self.key.map_tier = map_tier;
        self
    }

    pub fn gem(mut self, gem: GemAttributes) -> Self {
        self.key.gem_level = Some(gem.level);
        self.key.gem_quality = Some(gem.quality);
        self.key.gem_corrupted = Some(gem.corrupted);
        self
    }

    pub fn build(self) -> Key {
        let mut key = self.key;
        let frame = key.frame_type;

        if frame != FrameType::Gem {
            key.gem_level = None;
            key.gem_quality = None;
            key.gem_corrupted = None;
        }
        if !frame.carries_variants() {
            key.variation = None;
            key.links = None;
        }
        if !frame.carries_map_tier() {
            key.map_tier = None;
        }
        key.links = key.links.filter(|&links| links > 4);
        key
    }
}

#[cfg(test)]
#[path = "tests/key_tests.rs"]
mod tests;
