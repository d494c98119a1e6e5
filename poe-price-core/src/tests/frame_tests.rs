use super::*;

fn text(raw: &str) -> ItemText {
    ItemText::split(raw).unwrap()
}

#[test]
fn direct_rarities() {
    let item = text("Rarity: Unique\nX\n--------\nY\n");
    let cases = [
        (Rarity::Unique, FrameType::Unique),
        (Rarity::Gem, FrameType::Gem),
        (Rarity::Currency, FrameType::Currency),
        (Rarity::Fragment, FrameType::Fragment),
        (Rarity::DivinationCard, FrameType::DivinationCard),
    ];
    for (rarity, expected) in cases {
        assert_eq!(classify(rarity, &item).unwrap(), expected, "{rarity:?}");
    }
}

#[test]
fn direct_match_beats_phrase_scan() {
    let item = text(
        "Rarity: Unique\nThe Beachhead\nHarbinger Map\n--------\nMap Tier: 15\n--------\nTravel to this Map by using it in a personal Map Device. Maps can only be used once.\n",
    );
    assert_eq!(classify(Rarity::Unique, &item).unwrap(), FrameType::Unique);
}

#[test]
fn prophecy_phrase() {
    let item = text(
        "Rarity: Normal\nThe Queen's Sacrifice\n--------\nAtziri will fight you.\n--------\nRight-click to add this prophecy to your character.\n",
    );
    assert_eq!(classify(Rarity::Normal, &item).unwrap(), FrameType::Prophecy);
}

#[test]
fn map_phrase_for_any_normal_family_rarity() {
    let item = text(
        "Rarity: Rare\nGloom Crest\nDunes Map\n--------\nMap Tier: 14\n--------\nTravel to this Map by using it in a personal Map Device. Maps can only be used once.\n",
    );
    for rarity in [Rarity::Normal, Rarity::Magic, Rarity::Rare] {
        assert_eq!(classify(rarity, &item).unwrap(), FrameType::Fragment);
    }
}

#[test]
fn relic_marker_must_be_whole_line() {
    let relic = text("Rarity: Normal\nThing\n--------\nRelic Unique\n");
    assert_eq!(classify(Rarity::Normal, &relic).unwrap(), FrameType::Relic);

    let mention = text("Rarity: Normal\nThing\n--------\nNot a Relic Unique at all\n");
    assert_eq!(classify(Rarity::Normal, &mention).unwrap(), FrameType::Normal);
}

#[test]
fn fallback_keeps_rarity_distinct() {
    let item = text("Rarity: Magic\nSturdy Iron Hat\n--------\nItem Level: 2\n");
    assert_eq!(classify(Rarity::Normal, &item).unwrap(), FrameType::Normal);
    assert_eq!(classify(Rarity::Magic, &item).unwrap(), FrameType::Magic);
    assert_eq!(classify(Rarity::Rare, &item).unwrap(), FrameType::Rare);
}
