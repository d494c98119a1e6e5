use std::path::Path;

use poe_price_core::{FeedOptions, PriceSource};
use poe_price_lib::{PriceTable, Settings, price_check};

const ATZIRI: &str = "Rarity: Unique
Atziri's Splendour
Sacrificial Garb
--------
Armour: 1321 (augmented)
--------
Sockets: B-R-R-G-R-B
--------
Item Level: 84
--------
+(380-420)% increased Armour and Energy Shield
+90 to maximum Life
";

const FIREBALL: &str = "Rarity: Gem
Fireball
--------
Projectile, Spell, AoE, Fire
Level: 20 (Max)
Quality: +23% (augmented)
--------
Unleashes a ball of fire.
";

fn write(dir: &Path, file: &str, json: &str) {
    std::fs::write(dir.join(file), json).unwrap();
}

#[test]
fn ninja_feed_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "UniqueArmour.json",
        r#"{"lines": [
            {"name": "Atziri's Splendour", "baseType": "Sacrificial Garb", "variant": "Armour/ES/Life", "links": 6, "chaosValue": 400.0, "count": 12},
            {"name": "Atziri's Splendour", "baseType": "Sacrificial Garb", "variant": "Armour/ES/Life", "links": 0, "chaosValue": 90.0, "count": 80}
        ]}"#,
    );
    write(
        dir.path(),
        "SkillGem.json",
        r#"{"lines": [
            {"name": "Fireball", "gemLevel": 20, "gemQuality": 23, "corrupted": true, "chaosValue": 30.0, "count": 4},
            {"name": "Fireball", "gemLevel": 20, "gemQuality": 20, "corrupted": false, "chaosValue": 2.0, "count": 90}
        ]}"#,
    );

    let settings = Settings::default();
    let (table, summary) = PriceTable::load_dir(dir.path(), &settings.feed_options()).unwrap();
    assert_eq!(summary.loaded, 4);
    assert_eq!(table.len(), 4);

    let check = price_check(ATZIRI, &table, &settings.parse_options()).unwrap();
    assert_eq!(check.key.variation(), Some("ar/es/li"));
    assert_eq!(check.entry.unwrap().value, 400.0);

    let check = price_check(FIREBALL, &table, &settings.parse_options()).unwrap();
    assert_eq!(check.entry.unwrap().value, 30.0);
}

#[test]
fn watch_feed_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "gem.json",
        r#"[
            {"name": "Fireball", "gemLevel": 20, "gemQuality": 20, "corrupted": false, "mean": 2.5, "daily": 40}
        ]"#,
    );

    let mut settings = Settings::default();
    settings.source = PriceSource::Watch;
    let (table, _) = PriceTable::load_dir(dir.path(), &settings.feed_options()).unwrap();

    let check = price_check(FIREBALL, &table, &settings.parse_options()).unwrap();
    assert_eq!(check.key.gem_quality(), Some(20));
    assert_eq!(check.entry.unwrap().value, 2.5);
}

#[test]
fn ninja_labels_ignored_under_watch() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "SkillGem.json", "[]");
    let (table, summary) =
        PriceTable::load_dir(dir.path(), &FeedOptions::new(PriceSource::Watch)).unwrap();
    assert!(table.is_empty());
    assert_eq!(summary.loaded, 0);
}
