//! Header group parsing: item class, rarity, name and type line.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::splitter::RARITY_MARKER;

/// Prefix of the optional first header line naming the item class.
pub const ITEM_CLASS_MARKER: &str = "Item Class:";
/// Item class literal used by maps.
pub const MAP_ITEM_CLASS: &str = "Maps";
/// Quality prefix the game puts in front of normal item names.
const SUPERIOR_PREFIX: &str = "Superior ";

/// The literal values the rarity line can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Normal,
    Magic,
    Rare,
    Unique,
    Gem,
    Currency,
    Fragment,
    DivinationCard,
}

impl Rarity {
    /// The literal as it appears after `Rarity: `.
    pub fn literal(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Magic => "Magic",
            Self::Rare => "Rare",
            Self::Unique => "Unique",
            Self::Gem => "Gem",
            Self::Currency => "Currency",
            Self::Fragment => "Fragment",
            Self::DivinationCard => "Divination Card",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}

impl FromStr for Rarity {
    type Err = ParseError;

    /// Exact, case-sensitive match against the known literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Normal" => Ok(Self::Normal),
            "Magic" => Ok(Self::Magic),
            "Rare" => Ok(Self::Rare),
            "Unique" => Ok(Self::Unique),
            "Gem" => Ok(Self::Gem),
            "Currency" => Ok(Self::Currency),
            "Fragment" => Ok(Self::Fragment),
            "Divination Card" => Ok(Self::DivinationCard),
            other => Err(ParseError::unknown_rarity(other)),
        }
    }
}

/// Parsed header group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Value of the `Item Class:` line, when the client emits one.
    pub item_class: Option<String>,
    pub rarity: Rarity,
    /// Player-facing name.
    pub name: String,
    /// Base type, when the header has a second name line.
    pub type_line: Option<String>,
}

impl Header {
    pub fn is_map_class(&self) -> bool {
        self.item_class.as_deref() == Some(MAP_ITEM_CLASS)
    }
}

/// Parse the header group.
///
/// The rarity line is followed by one or two name lines. For rares the two
/// name lines arrive in the opposite order to every other rarity, so they are
/// swapped: afterwards `type_line` always holds the line the game reports as
/// the base type position.
pub fn parse_header(group: &[String]) -> Result<Header, ParseError> {
    let item_class = group
        .iter()
        .find_map(|line| line.strip_prefix(ITEM_CLASS_MARKER))
        .map(|class| class.trim().to_string());

    let rarity_index = group
        .iter()
        .position(|line| line.starts_with(RARITY_MARKER))
        .ok_or_else(|| ParseError::malformed("header has no rarity line"))?;
    let rarity: Rarity = group[rarity_index][RARITY_MARKER.len()..].parse()?;

    let mut names = group[rarity_index + 1..].iter().map(|line| line.trim().to_string());
    let first = names
        .next()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ParseError::malformed("header has no name line"))?;
    let second = names.next().filter(|line| !line.is_empty());

    let (mut name, type_line) = match (rarity, second) {
        (Rarity::Rare, Some(second)) => (second, Some(first)),
        (_, second) => (first, second),
    };

    if rarity == Rarity::Normal {
        if let Some(stripped) = name.strip_prefix(SUPERIOR_PREFIX) {
            name = stripped.to_string();
        }
    }

    Ok(Header {
        item_class,
        rarity,
        name,
        type_line,
    })
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
