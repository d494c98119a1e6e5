//! Resolves a [`FrameType`] from the declared rarity plus full-text signals.
//!
//! Three tiers, first hit wins:
//! 1. rarities that name their category directly,
//! 2. category-defining phrases anywhere in the text,
//! 3. the normal family fallback for Normal/Magic/Rare.

use crate::error::ParseError;
use crate::header::Rarity;
use crate::key::FrameType;
use crate::splitter::ItemText;

/// Usage hint printed on prophecies.
pub const PROPHECY_PHRASE: &str = "add this prophecy to your character";
/// Usage hint printed on maps.
pub const MAP_DEVICE_PHRASE: &str = "Travel to this Map by using it in a personal Map Device";
/// Standalone line marking relics.
pub const RELIC_MARKER: &str = "Relic Unique";

/// Classify an item.
pub fn classify(rarity: Rarity, text: &ItemText) -> Result<FrameType, ParseError> {
    let frame = direct_frame(rarity)
        .or_else(|| scanned_frame(text))
        .or_else(|| fallback_frame(rarity))
        .ok_or_else(|| ParseError::UnresolvedFrameType(rarity.to_string()))?;
    log::debug!("rarity {rarity} classified as {frame:?}");
    Ok(frame)
}

fn direct_frame(rarity: Rarity) -> Option<FrameType> {
    match rarity {
        Rarity::Unique => Some(FrameType::Unique),
        Rarity::Gem => Some(FrameType::Gem),
        Rarity::Currency => Some(FrameType::Currency),
        Rarity::Fragment => Some(FrameType::Fragment),
        Rarity::DivinationCard => Some(FrameType::DivinationCard),
        Rarity::Normal | Rarity::Magic | Rarity::Rare => None,
    }
}

fn scanned_frame(text: &ItemText) -> Option<FrameType> {
    if text.contains(PROPHECY_PHRASE) {
        Some(FrameType::Prophecy)
    } else if text.contains(MAP_DEVICE_PHRASE) {
        Some(FrameType::Fragment)
    } else if text.has_line(RELIC_MARKER) {
        Some(FrameType::Relic)
    } else {
        None
    }
}

fn fallback_frame(rarity: Rarity) -> Option<FrameType> {
    match rarity {
        Rarity::Normal => Some(FrameType::Normal),
        Rarity::Magic => Some(FrameType::Magic),
        Rarity::Rare => Some(FrameType::Rare),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/frame_tests.rs"]
mod tests;
