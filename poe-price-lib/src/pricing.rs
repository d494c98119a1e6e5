//! One-call price lookup for clipboard text.

use poe_price_core::{Key, ParseOptions, parse_with};

use crate::error::PriceError;
use crate::price_table::{Entry, PriceTable};

/// Outcome of a price check: the item's key and its entry, if priced.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCheck {
    pub key: Key,
    pub entry: Option<Entry>,
}

impl PriceCheck {
    pub fn is_priced(&self) -> bool {
        self.entry.is_some()
    }
}

/// Parse `text` and look the item up in `table`.
///
/// A missing entry is not an error; parse failures are.
pub fn price_check(
    text: &str,
    table: &PriceTable,
    options: &ParseOptions,
) -> Result<PriceCheck, PriceError> {
    let key = parse_with(text, options)?;
    let entry = table.get(&key).copied();
    match entry {
        Some(entry) => log::debug!("{} -> {} chaos", key.diagnostic(), entry.value),
        None => log::debug!("{} -> no price", key.diagnostic()),
    }
    Ok(PriceCheck { key, entry })
}
