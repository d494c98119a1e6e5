use super::*;

const CHAOS_ORB: &str = "Rarity: Currency\nChaos Orb\n--------\nStack Size: 7/10\n--------\nReforges a rare item with new random modifiers\n";

#[test]
fn splits_on_delimiter_lines() {
    let text = ItemText::split(CHAOS_ORB).unwrap();
    assert_eq!(text.groups().len(), 3);
    assert_eq!(text.header(), &["Rarity: Currency", "Chaos Orb"]);
    assert_eq!(text.group(1).unwrap(), &["Stack Size: 7/10"]);
    assert_eq!(
        text.last_group().unwrap(),
        &["Reforges a rare item with new random modifiers"]
    );
}

#[test]
fn handles_crlf_and_trailing_delimiter() {
    let raw = "Rarity: Currency\r\nChaos Orb\r\n--------\r\nStack Size: 1/10\r\n--------\r\n";
    let text = ItemText::split(raw).unwrap();
    assert_eq!(text.groups().len(), 2);
    assert_eq!(text.group(1).unwrap(), &["Stack Size: 1/10"]);
}

#[test]
fn missing_delimiter_is_malformed() {
    let err = ItemText::split("Rarity: Currency\nChaos Orb\n").unwrap_err();
    assert!(matches!(err, ParseError::MalformedInput(_)));
}

#[test]
fn missing_rarity_is_malformed() {
    let err = ItemText::split("Chaos Orb\n--------\nStack Size: 1/10\n").unwrap_err();
    assert!(matches!(err, ParseError::MalformedInput(_)));
}

#[test]
fn missing_both_markers_is_malformed() {
    for raw in ["", "hello world", "Chaos Orb\nStack Size: 1/10"] {
        assert!(
            matches!(ItemText::split(raw), Err(ParseError::MalformedInput(_))),
            "{raw:?} should be malformed"
        );
    }
}

#[test]
fn unidentified_item_rejected() {
    let raw = "Rarity: Rare\nHubris Circlet\n--------\nItem Level: 84\n--------\nUnidentified\n";
    assert_eq!(ItemText::split(raw), Err(ParseError::UnidentifiedItem));
}

#[test]
fn noted_item_rejected() {
    let raw = "Rarity: Currency\nChaos Orb\n--------\nStack Size: 1/10\n--------\nNote: ~price 1 chaos\n";
    assert_eq!(ItemText::split(raw), Err(ParseError::AlreadyNoted));
}

#[test]
fn line_queries() {
    let raw = "Rarity: Unique\nGoldrim\nLeather Cap\n--------\nSockets: B-B \n--------\nItem Level: 70\n--------\n+30 to all Elemental Resistances\n";
    let text = ItemText::split(raw).unwrap();
    assert_eq!(text.line_with_prefix("Sockets:"), Some("Sockets: B-B"));
    assert_eq!(text.group_with_prefix("Item Level:"), Some(2));
    assert!(text.has_line("Goldrim"));
    assert!(text.contains("Elemental Resistances"));
    assert!(!text.contains("Life"));
}
