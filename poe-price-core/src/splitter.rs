//! Splits a raw clipboard dump into its delimiter-separated line groups.
//!
//! The game's "copy item" text looks like:
//! ```text
//! Rarity: Unique
//! Atziri's Splendour
//! Sacrificial Garb
//! --------
//! Energy Shield: 351 (augmented)
//! --------
//! Sockets: B-R-R-G-R
//! --------
//! Item Level: 84
//! --------
//! ...
//! ```
//! Each block between `--------` lines becomes one group; group 0 is the
//! header.

use crate::error::ParseError;

/// Line separating two groups.
pub const GROUP_DELIMITER: &str = "--------";
/// Prefix of the header line carrying the rarity.
pub const RARITY_MARKER: &str = "Rarity:";
/// Present on items whose mods are still hidden.
pub const UNIDENTIFIED_MARKER: &str = "Unidentified";
/// Present on items that already carry a trade note.
pub const NOTE_MARKER: &str = "Note:";

/// Stands in for a delimiter line while the text is flattened.
const SENTINEL: &str = "\u{1f}";
/// Joins the sub-lines of one group.
const FIELD_SEPARATOR: char = '|';

/// The ordered line groups of one item dump.
///
/// Ephemeral: built and consumed within a single parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemText {
    groups: Vec<Vec<String>>,
}

impl ItemText {
    /// Split raw text into groups, rejecting unusable items.
    ///
    /// Fails with [`ParseError::MalformedInput`] unless both the delimiter and
    /// the rarity marker are present, then with
    /// [`ParseError::UnidentifiedItem`] or [`ParseError::AlreadyNoted`] if a
    /// sub-line disqualifies the item.
    pub fn split(raw: &str) -> Result<Self, ParseError> {
        if !raw.contains(GROUP_DELIMITER) {
            return Err(ParseError::malformed("no group delimiter"));
        }
        if !raw.contains(RARITY_MARKER) {
            return Err(ParseError::malformed("no rarity line"));
        }

        let separator = FIELD_SEPARATOR.to_string();
        let flattened = raw
            .replace(GROUP_DELIMITER, SENTINEL)
            .replace("\r\n", "\n")
            .replace('\n', &separator);
        let flattened = flattened.trim_end().trim_end_matches(FIELD_SEPARATOR);
        let boundary = format!("{FIELD_SEPARATOR}{SENTINEL}{FIELD_SEPARATOR}");

        let groups: Vec<Vec<String>> = flattened
            .split(boundary.as_str())
            .map(|group| {
                group
                    .split(FIELD_SEPARATOR)
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && *line != SENTINEL)
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|group| !group.is_empty())
            .collect();

        let text = Self { groups };
        text.reject_disqualified()?;
        Ok(text)
    }

    fn reject_disqualified(&self) -> Result<(), ParseError> {
        if self.lines().any(|line| line.contains(UNIDENTIFIED_MARKER)) {
            return Err(ParseError::UnidentifiedItem);
        }
        if self.lines().any(|line| line.contains(NOTE_MARKER)) {
            return Err(ParseError::AlreadyNoted);
        }
        Ok(())
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&[String]> {
        self.groups.get(index).map(Vec::as_slice)
    }

    /// The header group (rarity, name, type line).
    pub fn header(&self) -> &[String] {
        self.group(0).unwrap_or(&[])
    }

    pub fn last_group(&self) -> Option<&[String]> {
        self.groups.last().map(Vec::as_slice)
    }

    /// Every sub-line across all groups, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flatten().map(String::as_str)
    }

    /// Index of the first group holding a line that starts with `prefix`.
    pub fn group_with_prefix(&self, prefix: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.iter().any(|line| line.starts_with(prefix)))
    }

    /// First line starting with `prefix`, anywhere in the text.
    pub fn line_with_prefix(&self, prefix: &str) -> Option<&str> {
        self.lines().find(|line| line.starts_with(prefix))
    }

    pub fn has_line(&self, exact: &str) -> bool {
        self.lines().any(|line| line == exact)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
#[path = "tests/splitter_tests.rs"]
mod tests;
