//! Map tier and map base name for items of the map class.

use std::sync::LazyLock;

use regex::Regex;

use crate::splitter::ItemText;

static MAP_TIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Map Tier:\s*(\d+)").expect("map tier pattern"));

/// Map tier from the property group (group 1).
pub fn extract_map_tier(text: &ItemText) -> Option<u8> {
    text.group(1)?
        .iter()
        .find_map(|line| MAP_TIER.captures(line))
        .and_then(|caps| caps[1].parse().ok())
}

/// Base-name suffix of every map.
const MAP_SUFFIX: &str = " Map";

/// Prefix affixes magic maps put in front of the base name.
const MAGIC_MAP_PREFIXES: &[&str] = &[
    "Abhorrent",
    "Antagonist's",
    "Armoured",
    "Burning",
    "Capricious",
    "Chaining",
    "Conflagrating",
    "Enervating",
    "Fecund",
    "Feral",
    "Fleet",
    "Freezing",
    "Hexproof",
    "Impervious",
    "Mirrored",
    "Multifarious",
    "Overlord's",
    "Punishing",
    "Savage",
    "Shocking",
    "Splitting",
    "Stalwart",
    "Titan's",
    "Twinned",
    "Unstoppable",
    "Unwavering",
];

/// Base name of a magic map, with its prefix and `of ...` suffix removed.
///
/// `Fecund Dunes Map of Venom` becomes `Dunes Map`. Names without a known
/// prefix keep every leading word.
pub fn map_base_name(name: &str) -> &str {
    let base = match name.rfind(MAP_SUFFIX) {
        Some(at) => &name[..at + MAP_SUFFIX.len()],
        None => name,
    };
    match base.split_once(' ') {
        Some((first, rest)) if MAGIC_MAP_PREFIXES.contains(&first) => rest,
        _ => base,
    }
}
