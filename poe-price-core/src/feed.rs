//! Price-feed records → [`Key`].
//!
//! Feeds describe items through fixed JSON fields instead of free text, and
//! every provider has its own quirks: currency lines name the item in a
//! different field, tiers are `0` for "no tier", link counts are reported
//! for every item. [`normalize_feed_key`] remaps those fields so a feed line
//! and the parsed clipboard text of the same item build equal keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::gem::{BucketingPolicy, GemAttributes};
use crate::key::{FrameType, Key, KeyBuilder};
use crate::variant::variant_from_feed_label;

/// Provider a price table was downloaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    #[default]
    Ninja,
    Watch,
}

impl PriceSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ninja => "poe.ninja",
            Self::Watch => "poe.watch",
        }
    }

    /// Gem bucketing the provider applies to its own lines.
    pub fn bucketing_policy(&self) -> BucketingPolicy {
        match self {
            Self::Ninja => BucketingPolicy::Ninja,
            Self::Watch => BucketingPolicy::Watch,
        }
    }

    pub fn all() -> &'static [PriceSource] {
        &[Self::Ninja, Self::Watch]
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ninja => write!(f, "ninja"),
            Self::Watch => write!(f, "watch"),
        }
    }
}

impl FromStr for PriceSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ninja" | "poe.ninja" | "poeninja" => Ok(Self::Ninja),
            "watch" | "poe.watch" | "poewatch" => Ok(Self::Watch),
            _ => Err(format!(
                "unknown price source: '{s}' (expected 'ninja' or 'watch')"
            )),
        }
    }
}

/// Options for the feed path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedOptions {
    /// Selects the category vocabulary and the name field of currency lines.
    pub source: PriceSource,
}

impl FeedOptions {
    pub fn new(source: PriceSource) -> Self {
        Self { source }
    }
}

/// One line of a price feed, as decoded from JSON.
///
/// Unknown fields are ignored. The value and quantity fields accept each
/// provider's spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedRecord {
    pub name: Option<String>,
    pub base_type: Option<String>,
    /// Name field of currency and fragment lines on poe.ninja.
    pub currency_type_name: Option<String>,
    /// Numeric frame the provider reports. Informational only.
    pub item_class: Option<u32>,
    pub links: Option<u8>,
    pub map_tier: Option<u8>,
    pub gem_level: Option<u8>,
    pub gem_quality: Option<u8>,
    pub corrupted: Option<bool>,
    pub variant: Option<String>,
    #[serde(rename = "chaosValue", alias = "chaosEquivalent", alias = "mean")]
    pub value: Option<f64>,
    #[serde(rename = "count", alias = "daily")]
    pub quantity: Option<u32>,
}

impl FeedRecord {
    /// Record carrying just a name, for building test and fixture lines.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Item categories published by the price feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedCategory {
    Currency,
    Fragment,
    Essence,
    Fossil,
    Resonator,
    Scarab,
    Oil,
    Incubator,
    DivinationCard,
    Prophecy,
    SkillGem,
    UniqueWeapon,
    UniqueArmour,
    UniqueAccessory,
    UniqueFlask,
    UniqueJewel,
    UniqueMap,
    Map,
}

/// Category labels per provider: `(category, ninja, watch)`.
const CATEGORY_LABELS: &[(FeedCategory, &str, &str)] = &[
    (FeedCategory::Currency, "Currency", "currency"),
    (FeedCategory::Fragment, "Fragment", "fragment"),
    (FeedCategory::Essence, "Essence", "essence"),
    (FeedCategory::Fossil, "Fossil", "fossil"),
    (FeedCategory::Resonator, "Resonator", "resonator"),
    (FeedCategory::Scarab, "Scarab", "scarab"),
    (FeedCategory::Oil, "Oil", "oil"),
    (FeedCategory::Incubator, "Incubator", "incubator"),
    (FeedCategory::DivinationCard, "DivinationCard", "card"),
    (FeedCategory::Prophecy, "Prophecy", "prophecy"),
    (FeedCategory::SkillGem, "SkillGem", "gem"),
    (FeedCategory::UniqueWeapon, "UniqueWeapon", "weapon"),
    (FeedCategory::UniqueArmour, "UniqueArmour", "armour"),
    (FeedCategory::UniqueAccessory, "UniqueAccessory", "accessory"),
    (FeedCategory::UniqueFlask, "UniqueFlask", "flask"),
    (FeedCategory::UniqueJewel, "UniqueJewel", "jewel"),
    (FeedCategory::UniqueMap, "UniqueMap", "unique-map"),
    (FeedCategory::Map, "Map", "map"),
];

impl FeedCategory {
    /// Parse a provider's category label.
    pub fn from_label(label: &str, source: PriceSource) -> Result<Self, NormalizeError> {
        CATEGORY_LABELS
            .iter()
            .find(|(_, ninja, watch)| match source {
                PriceSource::Ninja => *ninja == label,
                PriceSource::Watch => *watch == label,
            })
            .map(|(category, _, _)| *category)
            .ok_or_else(|| NormalizeError::unknown_category(label))
    }

    /// The label `source` uses for this category.
    pub fn label(&self, source: PriceSource) -> &'static str {
        CATEGORY_LABELS
            .iter()
            .find(|(category, _, _)| category == self)
            .map(|(_, ninja, watch)| match source {
                PriceSource::Ninja => *ninja,
                PriceSource::Watch => *watch,
            })
            .unwrap_or("unknown")
    }

    pub fn all() -> impl Iterator<Item = FeedCategory> {
        CATEGORY_LABELS.iter().map(|(category, _, _)| *category)
    }

    pub fn is_unique(&self) -> bool {
        matches!(
            self,
            Self::UniqueWeapon
                | Self::UniqueArmour
                | Self::UniqueAccessory
                | Self::UniqueFlask
                | Self::UniqueJewel
                | Self::UniqueMap
        )
    }

    /// Frame type the clipboard path resolves for items of this category.
    fn frame_type(&self) -> FrameType {
        match self {
            Self::Currency
            | Self::Essence
            | Self::Fossil
            | Self::Resonator
            | Self::Oil
            | Self::Incubator => FrameType::Currency,
            Self::Fragment | Self::Map => FrameType::Fragment,
            Self::Scarab => FrameType::Normal,
            Self::DivinationCard => FrameType::DivinationCard,
            Self::Prophecy => FrameType::Prophecy,
            Self::SkillGem => FrameType::Gem,
            _ => FrameType::Unique,
        }
    }
}

impl fmt::Display for FeedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(PriceSource::Ninja))
    }
}

/// Build the key of a feed record listed under the `category` label.
///
/// # Examples
///
/// ```
/// use poe_price_core::{FeedOptions, FeedRecord, FrameType, normalize_feed_key};
///
/// let record = FeedRecord {
///     currency_type_name: Some("Exalted Orb".into()),
///     ..FeedRecord::default()
/// };
/// let key = normalize_feed_key("Currency", &record, &FeedOptions::default()).unwrap();
/// assert_eq!(key.name(), "Exalted Orb");
/// assert_eq!(key.frame_type(), FrameType::Currency);
/// ```
pub fn normalize_feed_key(
    category: &str,
    record: &FeedRecord,
    options: &FeedOptions,
) -> Result<Key, NormalizeError> {
    let category = FeedCategory::from_label(category, options.source)?;
    normalize_feed_record(category, record, options)
}

/// Like [`normalize_feed_key`] with the category label already resolved.
pub fn normalize_feed_record(
    category: FeedCategory,
    record: &FeedRecord,
    options: &FeedOptions,
) -> Result<Key, NormalizeError> {
    let name = record_name(category, record, options.source)?;
    let frame = category.frame_type();

    let builder = match category {
        FeedCategory::Map | FeedCategory::UniqueMap => map_shape(name, frame, record),
        FeedCategory::SkillGem => {
            let level = record
                .gem_level
                .ok_or_else(|| NormalizeError::missing_field(category.to_string(), "gemLevel"))?;
            let gem = GemAttributes {
                level,
                quality: record.gem_quality.unwrap_or(0),
                corrupted: record.corrupted.unwrap_or(false),
            };
            let type_line = record.base_type.clone().or_else(|| Some(name.clone()));
            KeyBuilder::new(name, frame).type_line(type_line).gem(gem)
        }
        _ if category.is_unique() => {
            let variation = record
                .variant
                .as_deref()
                .and_then(|label| variant_from_feed_label(&name, label))
                .map(String::from);
            KeyBuilder::new(name, frame)
                .type_line(record.base_type.clone())
                .links(record.links.filter(|&links| matches!(links, 5 | 6)))
                .variation(variation)
        }
        _ => KeyBuilder::new(name, frame),
    };

    let key = builder.build();
    log::trace!(
        "{category} record (class {:?}) -> {}",
        record.item_class,
        key.diagnostic()
    );
    Ok(key)
}

fn record_name(
    category: FeedCategory,
    record: &FeedRecord,
    source: PriceSource,
) -> Result<String, NormalizeError> {
    let (value, field) = match (source, category) {
        (PriceSource::Ninja, FeedCategory::Currency | FeedCategory::Fragment) => {
            (&record.currency_type_name, "currencyTypeName")
        }
        _ => (&record.name, "name"),
    };
    value
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .ok_or_else(|| NormalizeError::missing_field(category.to_string(), field))
}

/// Name, tier and frame only, the same shape as a parsed map.
///
/// A missing or zero `mapTier` falls back to a tier-style variant label such
/// as `T15`.
fn map_shape(name: String, frame: FrameType, record: &FeedRecord) -> KeyBuilder {
    let tier = record
        .map_tier
        .filter(|&tier| tier > 0)
        .or_else(|| record.variant.as_deref().and_then(tier_from_label));
    KeyBuilder::new(name, frame).map_tier(tier)
}

fn tier_from_label(label: &str) -> Option<u8> {
    let label = label.trim();
    let digits = label
        .strip_prefix('T')
        .or_else(|| label.strip_prefix('t'))?;
    digits.parse().ok().filter(|&tier| tier > 0)
}

#[cfg(test)]
#[path = "tests/feed_tests.rs"]
mod tests;
