//! Provider-agnostic price table: [`Key`] → [`Entry`].
//!
//! Feed documents are normalized line by line through
//! [`normalize_feed_record`], so lookups with a parsed clipboard key hit the
//! same entries regardless of which provider the table came from.

use std::collections::HashMap;
use std::path::Path;

use poe_price_core::{FeedCategory, FeedOptions, FeedRecord, Key, normalize_feed_record};
use serde_json::Value;

use crate::error::PriceError;

/// Price of one item as reported by a feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// Price in chaos orbs.
    pub value: f64,
    /// Number of listings the price was computed from.
    pub quantity: u32,
}

/// Counts from one feed document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

impl LoadSummary {
    fn merge(&mut self, other: LoadSummary) {
        self.loaded += other.loaded;
        self.skipped += other.skipped;
    }
}

/// Pull the record list out of either document shape: `{"lines": [...]}`
/// or a bare array.
fn feed_lines(json: &str) -> Result<Vec<FeedRecord>, PriceError> {
    let lines = match serde_json::from_str::<Value>(json)? {
        Value::Object(mut document) => match document.remove("lines") {
            Some(lines @ Value::Array(_)) => lines,
            Some(_) => return Err(PriceError::invalid_feed("`lines` is not an array")),
            None => return Err(PriceError::invalid_feed("document has no `lines` array")),
        },
        lines @ Value::Array(_) => lines,
        _ => {
            return Err(PriceError::invalid_feed(
                "expected an object with `lines` or an array",
            ));
        }
    };
    Ok(serde_json::from_value(lines)?)
}

#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    entries: HashMap<Key, Entry>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; on collision the entry with more listings wins.
    pub fn insert(&mut self, key: Key, entry: Entry) {
        match self.entries.get(&key) {
            Some(existing) if existing.quantity >= entry.quantity => {
                log::trace!("Keeping existing entry for {key}");
            }
            _ => {
                self.entries.insert(key, entry);
            }
        }
    }

    pub fn get(&self, key: &Key) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load one feed document listed under `category`.
    ///
    /// An unknown category or an unreadable document fails the whole load.
    /// Individual lines that cannot be normalized, or carry no value, are
    /// skipped and counted.
    pub fn load_json(
        &mut self,
        category: &str,
        json: &str,
        options: &FeedOptions,
    ) -> Result<LoadSummary, PriceError> {
        let category = FeedCategory::from_label(category, options.source)?;
        let lines = feed_lines(json)?;

        let mut summary = LoadSummary::default();
        for record in lines {
            let Some(value) = record.value else {
                log::warn!("Skipping {category} line without a value: {:?}", record.name);
                summary.skipped += 1;
                continue;
            };
            match normalize_feed_record(category, &record, options) {
                Ok(key) => {
                    let entry = Entry {
                        value,
                        quantity: record.quantity.unwrap_or(0),
                    };
                    self.insert(key, entry);
                    summary.loaded += 1;
                }
                Err(e) => {
                    log::warn!("Skipping {category} line: {e}");
                    summary.skipped += 1;
                }
            }
        }

        log::info!(
            "Loaded {} {category} prices ({} skipped)",
            summary.loaded,
            summary.skipped
        );
        Ok(summary)
    }

    /// Load every `<Category>.json` file in `dir`.
    ///
    /// The file stem is the category label in the selected source's
    /// vocabulary. Files whose stem is not a known category are skipped.
    pub fn load_dir(dir: &Path, options: &FeedOptions) -> Result<(Self, LoadSummary), PriceError> {
        let mut table = Self::new();
        let mut summary = LoadSummary::default();

        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if FeedCategory::from_label(stem, options.source).is_err() {
                log::warn!("Ignoring {}: not a {} category", path.display(), options.source);
                continue;
            }
            let json = std::fs::read_to_string(&path)?;
            summary.merge(table.load_json(stem, &json, options)?);
        }

        if table.is_empty() {
            log::warn!("No prices loaded from {}", dir.display());
        }
        Ok((table, summary))
    }
}
