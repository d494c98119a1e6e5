//! Gem level/quality extraction and price-bucket normalization.
//!
//! Price feeds group gems into a handful of level/quality buckets. A parsed
//! gem must land in exactly the bucket its feed uses, otherwise the lookup
//! silently misses, so the bucketing rules are selected per price source via
//! [`BucketingPolicy`].

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::splitter::ItemText;

static LEVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Level:\s*(\d+)").expect("gem level pattern"));
static QUALITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Quality:\s*\+?(\d+)%").expect("gem quality pattern"));

/// Line in the final group of corrupted items.
pub const CORRUPTED_MARKER: &str = "Corrupted";
/// Name prefix of the Vaal gem family, which is always corrupted.
const VAAL_PREFIX: &str = "Vaal ";
/// Support gems whose quality only matters at levels 1 and 2.
pub const META_GEMS: &[&str] = &["Empower Support", "Enlighten Support", "Enhance Support"];

/// Level, quality and corruption of a gem, already bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GemAttributes {
    pub level: u8,
    pub quality: u8,
    pub corrupted: bool,
}

/// Gem bucketing rules of one price source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketingPolicy {
    /// Levels {1, 20, 21}, qualities {0, 20, 23}, with the level/quality
    /// consistency clamps.
    #[default]
    Ninja,
    /// Levels {1, 20, 21}, qualities {0, 20}, no clamps.
    Watch,
}

impl BucketingPolicy {
    /// Bucket raw gem values.
    pub fn bucket(&self, name: &str, level: u8, quality: u8, corrupted: bool) -> GemAttributes {
        if META_GEMS.contains(&name) {
            return bucket_meta(level, quality, corrupted);
        }
        match self {
            Self::Ninja => bucket_ninja(name, level, quality, corrupted),
            Self::Watch => bucket_watch(name, level, quality, corrupted),
        }
    }
}

impl FromStr for BucketingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ninja" => Ok(Self::Ninja),
            "watch" => Ok(Self::Watch),
            _ => Err(format!("unknown bucketing policy: '{s}'")),
        }
    }
}

fn bucket_meta(level: u8, quality: u8, corrupted: bool) -> GemAttributes {
    let quality = if level > 2 || quality < 10 { 0 } else { 20 };
    GemAttributes {
        level,
        quality,
        corrupted,
    }
}

fn bucket_level(level: u8) -> u8 {
    match level {
        0..18 => 1,
        18..21 => 20,
        _ => 21,
    }
}

fn bucket_ninja(name: &str, level: u8, quality: u8, corrupted: bool) -> GemAttributes {
    let bucketed_level = bucket_level(level);
    let mut bucketed_quality = match quality {
        0..17 => 0,
        17..22 => 20,
        _ => 23,
    };

    if bucketed_level < 20 && bucketed_quality > 20 {
        bucketed_quality = 20;
    }
    if bucketed_level == 21 && quality < 20 {
        bucketed_quality = 0;
    }

    GemAttributes {
        level: bucketed_level,
        quality: bucketed_quality,
        corrupted: corrupted
            || bucketed_level > 20
            || bucketed_quality > 20
            || name.starts_with(VAAL_PREFIX),
    }
}

fn bucket_watch(name: &str, level: u8, quality: u8, corrupted: bool) -> GemAttributes {
    let bucketed_level = bucket_level(level);
    GemAttributes {
        level: bucketed_level,
        quality: if quality < 17 { 0 } else { 20 },
        corrupted: corrupted || bucketed_level > 20 || name.starts_with(VAAL_PREFIX),
    }
}

/// Read and bucket the gem data of a parsed item.
///
/// Level and quality come from the property group (group 1); a missing level
/// fails with [`ParseError::MissingGemData`], a missing quality counts as 0.
pub fn extract_gem(
    name: &str,
    text: &ItemText,
    policy: BucketingPolicy,
) -> Result<GemAttributes, ParseError> {
    let properties = text
        .group(1)
        .ok_or_else(|| ParseError::missing_gem_data(format!("{name}: no property group")))?;

    let level: u8 = properties
        .iter()
        .find_map(|line| LEVEL.captures(line))
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| ParseError::missing_gem_data(format!("{name}: no level")))?;
    let quality: u8 = properties
        .iter()
        .find_map(|line| QUALITY.captures(line))
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);
    let corrupted = text
        .last_group()
        .is_some_and(|group| group.iter().any(|line| line == CORRUPTED_MARKER));

    let gem = policy.bucket(name, level, quality, corrupted);
    log::debug!(
        "gem {name}: level {level} quality {quality} corrupted {corrupted} -> {gem:?} ({policy:?})"
    );
    Ok(gem)
}

#[cfg(test)]
#[path = "tests/gem_tests.rs"]
mod tests;
