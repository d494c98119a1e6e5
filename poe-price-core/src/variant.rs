//! Named variants of unique items that split into several price lines.
//!
//! Some uniques roll one of a few mutually exclusive mod sets, and price
//! feeds list each as its own line. [`VARIANTS`] maps every such item name to
//! where its deciding mods live ([`ModScan`]) and an ordered list of
//! [`VariantRule`]s. The same rule carries both the clipboard keywords and
//! the label the feed uses, so both sources resolve to one canonical tag.

use crate::splitter::ItemText;

/// Prefix of the line that anchors relative mod scans.
pub const ITEM_LEVEL_MARKER: &str = "Item Level:";
/// Suffix of enchantment lines.
const ENCHANT_SUFFIX: &str = "(enchant)";

/// Where the lines deciding a variant are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModScan {
    /// Any line of the text.
    Anywhere,
    /// The group `offset` groups after the item-level group.
    ///
    /// Offset 1 is the first mod group; items with an implicit use 2.
    AfterItemLevel { offset: usize },
    /// Like [`AfterItemLevel`](Self::AfterItemLevel), but enchantment groups
    /// directly after the item level are skipped first.
    PastEnchantments { offset: usize },
}

impl ModScan {
    /// Lines this scan covers in `text`. Empty when the anchor or the target
    /// group is missing.
    pub fn lines<'a>(&self, text: &'a ItemText) -> Vec<&'a str> {
        let target = match *self {
            Self::Anywhere => return text.lines().collect(),
            Self::AfterItemLevel { offset } => text
                .group_with_prefix(ITEM_LEVEL_MARKER)
                .map(|anchor| anchor + offset),
            Self::PastEnchantments { offset } => {
                text.group_with_prefix(ITEM_LEVEL_MARKER).map(|anchor| {
                    let mut first_mod = anchor + 1;
                    while text.group(first_mod).is_some_and(is_enchant_group) {
                        first_mod += 1;
                    }
                    first_mod + offset.saturating_sub(1)
                })
            }
        };

        target
            .and_then(|index| text.group(index))
            .map(|group| group.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

fn is_enchant_group(group: &[String]) -> bool {
    group.iter().all(|line| line.ends_with(ENCHANT_SUFFIX))
}

/// One variant of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRule {
    /// Canonical tag stored in [`Key::variation`](crate::Key::variation).
    pub tag: &'static str,
    /// Label the price feed gives this variant.
    pub feed_label: &'static str,
    /// Every needle must appear in some scanned line.
    pub needles: &'static [&'static str],
}

impl VariantRule {
    fn matches(&self, lines: &[&str]) -> bool {
        self.needles
            .iter()
            .all(|needle| lines.iter().any(|line| line.contains(needle)))
    }
}

/// Variant rules of one item.
#[derive(Debug, Clone, Copy)]
pub struct VariantEntry {
    pub name: &'static str,
    pub scan: ModScan,
    /// Ordered: the first matching rule wins.
    pub rules: &'static [VariantRule],
}

const fn rule(
    tag: &'static str,
    feed_label: &'static str,
    needles: &'static [&'static str],
) -> VariantRule {
    VariantRule {
        tag,
        feed_label,
        needles,
    }
}

const ATZIRIS_SPLENDOUR: &[VariantRule] = &[
    rule("ar/ev/es", "Armour/Evasion/ES", &["increased Armour, Evasion and Energy Shield"]),
    rule("ar/es/li", "Armour/ES/Life", &["increased Armour and Energy Shield", "to maximum Life"]),
    rule("ev/es/li", "Evasion/ES/Life", &["increased Evasion and Energy Shield", "to maximum Life"]),
    rule("ar/ev/li", "Armour/Evasion/Life", &["increased Armour and Evasion", "to maximum Life"]),
    rule("ar/es", "Armour/ES", &["increased Armour and Energy Shield"]),
    rule("ev/es", "Evasion/ES", &["increased Evasion and Energy Shield"]),
    rule("ar/ev", "Armour/Evasion", &["increased Armour and Evasion"]),
    rule("ar", "Armour", &["increased Armour"]),
    rule("ev", "Evasion", &["increased Evasion Rating"]),
    rule("es", "ES", &["increased Energy Shield"]),
];

const VESSEL_OF_VINKTAR: &[VariantRule] = &[
    rule("attacks", "Added Attacks", &["Lightning Damage to Attacks"]),
    rule("spells", "Added Spells", &["Lightning Damage to Spells"]),
    rule("penetration", "Penetration", &["Penetrates"]),
    rule("conversion", "Conversion", &["Converted to Lightning"]),
];

const DORYANIS_INVITATION: &[VariantRule] = &[
    rule("lightning", "Lightning", &["increased Lightning Damage"]),
    rule("fire", "Fire", &["increased Fire Damage"]),
    rule("cold", "Cold", &["increased Cold Damage"]),
    rule("physical", "Physical", &["increased Global Physical Damage"]),
];

const YRIELS_FOSTERING: &[VariantRule] = &[
    rule("snake", "Snake", &["Summon Bestial Snake"]),
    rule("ursa", "Ursa", &["Summon Bestial Ursa"]),
    rule("rhoa", "Rhoa", &["Summon Bestial Rhoa"]),
];

const VOLKUURS_GUIDANCE: &[VariantRule] = &[
    rule("fire", "Fire", &["Fire Damage"]),
    rule("cold", "Cold", &["Cold Damage"]),
    rule("lightning", "Lightning", &["Lightning Damage"]),
];

const IMPRESENCE: &[VariantRule] = &[
    rule("physical", "Physical", &["Physical Damage"]),
    rule("fire", "Fire", &["Fire Damage"]),
    rule("cold", "Cold", &["Cold Damage"]),
    rule("lightning", "Lightning", &["Lightning Damage"]),
    rule("chaos", "Chaos", &["Chaos Damage"]),
];

const ABYSSAL_SOCKETS: &[VariantRule] = &[
    rule("2 sockets", "2 Jewels", &["Has 2 Abyssal Sockets"]),
    rule("1 socket", "1 Jewel", &["Has 1 Abyssal Socket"]),
];

const THE_BEACHHEAD: &[VariantRule] = &[
    rule("t15", "T15", &["Map Tier: 15"]),
    rule("t10", "T10", &["Map Tier: 10"]),
    rule("t5", "T5", &["Map Tier: 5"]),
];

const COMBAT_FOCUS: &[VariantRule] = &[
    rule("crimson", "Crimson", &["Strength in Radius"]),
    rule("viridian", "Viridian", &["Dexterity in Radius"]),
    rule("cobalt", "Cobalt", &["Intelligence in Radius"]),
];

/// Every item with named variants.
pub static VARIANTS: &[VariantEntry] = &[
    VariantEntry {
        name: "Atziri's Splendour",
        scan: ModScan::AfterItemLevel { offset: 1 },
        rules: ATZIRIS_SPLENDOUR,
    },
    VariantEntry {
        name: "Vessel of Vinktar",
        scan: ModScan::AfterItemLevel { offset: 1 },
        rules: VESSEL_OF_VINKTAR,
    },
    VariantEntry {
        name: "Doryani's Invitation",
        scan: ModScan::AfterItemLevel { offset: 2 },
        rules: DORYANIS_INVITATION,
    },
    VariantEntry {
        name: "Yriel's Fostering",
        scan: ModScan::AfterItemLevel { offset: 1 },
        rules: YRIELS_FOSTERING,
    },
    VariantEntry {
        // Gloves can carry a lab enchant above the mods.
        name: "Volkuur's Guidance",
        scan: ModScan::PastEnchantments { offset: 1 },
        rules: VOLKUURS_GUIDANCE,
    },
    VariantEntry {
        name: "Impresence",
        scan: ModScan::AfterItemLevel { offset: 2 },
        rules: IMPRESENCE,
    },
    VariantEntry {
        name: "Lightpoacher",
        scan: ModScan::PastEnchantments { offset: 1 },
        rules: ABYSSAL_SOCKETS,
    },
    VariantEntry {
        name: "Shroud of the Lightless",
        scan: ModScan::AfterItemLevel { offset: 1 },
        rules: ABYSSAL_SOCKETS,
    },
    VariantEntry {
        name: "Bubonic Trail",
        scan: ModScan::PastEnchantments { offset: 1 },
        rules: ABYSSAL_SOCKETS,
    },
    VariantEntry {
        name: "Tombfist",
        scan: ModScan::PastEnchantments { offset: 1 },
        rules: ABYSSAL_SOCKETS,
    },
    VariantEntry {
        name: "Hale Negator",
        scan: ModScan::AfterItemLevel { offset: 2 },
        rules: ABYSSAL_SOCKETS,
    },
    VariantEntry {
        name: "Command of the Pit",
        scan: ModScan::AfterItemLevel { offset: 2 },
        rules: ABYSSAL_SOCKETS,
    },
    VariantEntry {
        name: "The Beachhead",
        scan: ModScan::Anywhere,
        rules: THE_BEACHHEAD,
    },
    VariantEntry {
        name: "Combat Focus",
        scan: ModScan::Anywhere,
        rules: COMBAT_FOCUS,
    },
];

/// Look up the variant entry for an item name.
pub fn variant_entry(name: &str) -> Option<&'static VariantEntry> {
    VARIANTS.iter().find(|entry| entry.name == name)
}

/// Resolve the variant tag of a parsed item from its mod text.
///
/// `None` when the item has no entry or no rule matches.
pub fn resolve_variant(name: &str, text: &ItemText) -> Option<&'static str> {
    let entry = variant_entry(name)?;
    let lines = entry.scan.lines(text);
    let tag = entry
        .rules
        .iter()
        .find(|rule| rule.matches(&lines))
        .map(|rule| rule.tag);
    match tag {
        Some(tag) => log::debug!("{name}: variant {tag}"),
        None => log::debug!("{name}: no variant rule matched {} lines", lines.len()),
    }
    tag
}

/// Resolve the variant tag of a feed record from the feed's variant label.
pub fn variant_from_feed_label(name: &str, label: &str) -> Option<&'static str> {
    variant_entry(name)?
        .rules
        .iter()
        .find(|rule| rule.feed_label.eq_ignore_ascii_case(label.trim()))
        .map(|rule| rule.tag)
}

#[cfg(test)]
#[path = "tests/variant_tests.rs"]
mod tests;
