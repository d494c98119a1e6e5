//! Clipboard text and feed records for the same item must build equal keys.

use poe_price_core::{
    FeedOptions, FeedRecord, Key, ModScan, ParseOptions, PriceSource, VARIANTS, VariantEntry,
    normalize_feed_key, parse, parse_with,
};

const BASE: &str = "Synthetic Base";

/// Clipboard text for `entry` whose deciding group holds `mods`.
fn synthetic_text(entry: &VariantEntry, mods: &[&str]) -> String {
    let mut groups = vec![
        format!("Rarity: Unique\n{}\n{BASE}", entry.name),
        "Requirements:\nLevel: 60".to_string(),
        "Item Level: 80".to_string(),
    ];
    match entry.scan {
        ModScan::Anywhere => {}
        ModScan::AfterItemLevel { offset } => {
            for _ in 1..offset {
                groups.push("+12 to Strength (implicit)".to_string());
            }
        }
        ModScan::PastEnchantments { offset } => {
            groups.push("Enchantment Filler (enchant)".to_string());
            for _ in 1..offset {
                groups.push("+12 to Strength (implicit)".to_string());
            }
        }
    }
    groups.push(mods.join("\n"));
    groups.push("Flavour text.".to_string());
    groups.join("\n--------\n") + "\n"
}

fn feed_category(name: &str) -> &'static str {
    match name {
        "The Beachhead" => "UniqueMap",
        "Combat Focus" => "UniqueJewel",
        _ => "UniqueArmour",
    }
}

fn feed_record(name: &str, label: &str) -> FeedRecord {
    FeedRecord {
        base_type: Some(BASE.into()),
        variant: Some(label.into()),
        links: Some(0),
        map_tier: Some(0),
        ..FeedRecord::named(name)
    }
}

#[test]
fn every_variant_converges() {
    for entry in VARIANTS {
        for rule in entry.rules {
            let text = synthetic_text(entry, rule.needles);
            let parsed = parse(&text)
                .unwrap_or_else(|e| panic!("{} / {}: {e}", entry.name, rule.tag));
            assert_eq!(
                parsed.variation(),
                Some(rule.tag),
                "{} resolved the wrong variant",
                entry.name
            );
            // Map feeds are keyed by tier; see beachhead_converges_on_map_text.
            if feed_category(entry.name) == "UniqueMap" {
                continue;
            }

            let record = feed_record(entry.name, rule.feed_label);
            let normalized =
                normalize_feed_key(feed_category(entry.name), &record, &FeedOptions::default())
                    .unwrap_or_else(|e| panic!("{} / {}: {e}", entry.name, rule.tag));
            assert_eq!(parsed, normalized, "{} / {}", entry.name, rule.tag);
        }
    }
}

#[test]
fn beachhead_converges_on_map_text() {
    for (tier, label) in [(15, "T15"), (10, "T10"), (5, "T5")] {
        let raw = format!(
            "Item Class: Maps
Rarity: Unique
The Beachhead
Harbinger Map
--------
Map Tier: {tier}
Item Quantity: +80% (augmented)
--------
Item Level: 75
--------
Travel to this Map by using it in a personal Map Device. Maps can only be used once.
"
        );
        let parsed = parse(&raw).unwrap();
        assert_eq!(parsed.map_tier(), Some(tier));

        let with_tier = FeedRecord {
            base_type: Some("Harbinger Map".into()),
            variant: Some(label.into()),
            map_tier: Some(tier),
            ..FeedRecord::named("The Beachhead")
        };
        let label_only = FeedRecord {
            map_tier: None,
            ..with_tier.clone()
        };
        for record in [with_tier, label_only] {
            let normalized =
                normalize_feed_key("UniqueMap", &record, &FeedOptions::default()).unwrap();
            assert_eq!(parsed, normalized, "{label}");
        }
    }
}

#[test]
fn unmatched_variant_converges_on_no_variant() {
    let entry = &VARIANTS[0];
    let parsed = parse(&synthetic_text(entry, &["+40 to maximum Mana"])).unwrap();
    assert_eq!(parsed.variation(), None);

    let record = FeedRecord {
        variant: None,
        ..feed_record(entry.name, "")
    };
    let normalized = normalize_feed_key("UniqueArmour", &record, &FeedOptions::default()).unwrap();
    assert_eq!(parsed, normalized);
}

#[test]
fn six_link_unique_converges() {
    let raw = "Rarity: Unique
Tabula Rasa
Simple Robe
--------
Sockets: W-W-W-W-W-W
--------
Item Level: 70
";
    let record = FeedRecord {
        base_type: Some("Simple Robe".into()),
        links: Some(6),
        ..FeedRecord::named("Tabula Rasa")
    };
    let parsed = parse(raw).unwrap();
    assert_eq!(parsed.links(), Some(6));
    assert_eq!(
        parsed,
        normalize_feed_key("UniqueArmour", &record, &FeedOptions::default()).unwrap()
    );
}

fn gem_text(name: &str, level: u8, quality: u8, corrupted: bool) -> String {
    let corrupted = if corrupted { "\n--------\nCorrupted" } else { "" };
    format!(
        "Rarity: Gem\n{name}\n--------\nSpell\nLevel: {level}\nQuality: +{quality}% (augmented)\n--------\nDeals damage.{corrupted}\n"
    )
}

fn gem_record(name: &str, level: u8, quality: u8, corrupted: bool) -> FeedRecord {
    FeedRecord {
        gem_level: Some(level),
        gem_quality: Some(quality),
        corrupted: Some(corrupted),
        ..FeedRecord::named(name)
    }
}

#[test]
fn gems_land_in_the_ninja_buckets() {
    let ninja = FeedOptions::new(PriceSource::Ninja);
    let cases = [
        (gem_text("Fireball", 19, 18, false), gem_record("Fireball", 20, 20, false)),
        (gem_text("Fireball", 21, 23, true), gem_record("Fireball", 21, 23, true)),
        (gem_text("Fireball", 21, 12, false), gem_record("Fireball", 21, 0, true)),
        (gem_text("Vaal Grace", 5, 0, false), gem_record("Vaal Grace", 1, 0, true)),
        (gem_text("Empower Support", 3, 20, false), gem_record("Empower Support", 3, 0, false)),
    ];
    for (text, record) in cases {
        let parsed = parse(&text).unwrap();
        let normalized = normalize_feed_key("SkillGem", &record, &ninja).unwrap();
        assert_eq!(parsed, normalized, "{}", parsed.diagnostic());
    }
}

#[test]
fn gems_land_in_the_watch_buckets() {
    let watch = FeedOptions::new(PriceSource::Watch);
    let options = ParseOptions::new().policy(watch.source.bucketing_policy());
    let cases = [
        (gem_text("Fireball", 20, 23, false), gem_record("Fireball", 20, 20, false)),
        (gem_text("Fireball", 21, 19, false), gem_record("Fireball", 21, 20, true)),
        (gem_text("Fireball", 1, 16, false), gem_record("Fireball", 1, 0, false)),
    ];
    for (text, record) in cases {
        let parsed = parse_with(&text, &options).unwrap();
        let normalized = normalize_feed_key("gem", &record, &watch).unwrap();
        assert_eq!(parsed, normalized, "{}", parsed.diagnostic());
    }
}

#[test]
fn currency_and_cards_converge() {
    let currency = FeedRecord {
        currency_type_name: Some("Exalted Orb".into()),
        ..FeedRecord::default()
    };
    assert_eq!(
        parse("Rarity: Currency\nExalted Orb\n--------\nStack Size: 1/10\n").unwrap(),
        normalize_feed_key("Currency", &currency, &FeedOptions::default()).unwrap()
    );

    assert_eq!(
        parse("Rarity: Divination Card\nThe Doctor\n--------\nStack Size: 1/8\n").unwrap(),
        normalize_feed_key(
            "card",
            &FeedRecord::named("The Doctor"),
            &FeedOptions::new(PriceSource::Watch)
        )
        .unwrap()
    );
}

#[test]
fn maps_converge() {
    let raw = "Item Class: Maps
Rarity: Normal
Superior Dunes Map
--------
Map Tier: 14
Quality: +10% (augmented)
--------
Item Level: 81
--------
Travel to this Map by using it in a personal Map Device. Maps can only be used once.
";
    let record = FeedRecord {
        map_tier: Some(14),
        ..FeedRecord::named("Dunes Map")
    };
    let expected: Key = normalize_feed_key("Map", &record, &FeedOptions::default()).unwrap();
    assert_eq!(parse(raw).unwrap(), expected);

    let magic = "Item Class: Maps
Rarity: Magic
Fecund Dunes Map of Venom
--------
Map Tier: 14
--------
Item Level: 81
--------
Travel to this Map by using it in a personal Map Device. Maps can only be used once.
";
    assert_eq!(parse(magic).unwrap(), expected);
}
