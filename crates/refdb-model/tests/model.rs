//! Tests for refdb-model types.

use refdb_model::{Catalog, Quantity, Record, Row};

#[test]
fn numeric_quantity_contributes_its_value() {
    let quantity = Quantity::numeric(12.5);
    assert_eq!(quantity.contribution(), Some(12.5));
    assert_eq!(quantity.as_numeric(), Some(12.5));
    assert_eq!(quantity.label(), None);
}

#[test]
fn extra_quantity_contributes_fallback_amount() {
    let quantity = Quantity::extra(Some("special".to_string()), Some(3.0));
    assert_eq!(quantity.contribution(), Some(3.0));
    assert_eq!(quantity.as_numeric(), None);
    assert_eq!(quantity.label(), Some("special"));

    let empty = Quantity::extra(None, None);
    assert_eq!(empty.contribution(), None);
}

#[test]
fn search_text_joins_description_and_key_lowercased() {
    let record = Record::new("Great Sword", "ORE", vec![]);
    assert_eq!(record.search_text(), "great sword ore");
    assert!(record.matches("sword o"));
    assert!(!record.matches("Sword"));
}

#[test]
fn quantity_header_names_the_key() {
    let record = Record::new("Shield", "Wood", vec![]);
    assert_eq!(record.quantity_header(), "Wood needed");
}

#[test]
fn catalog_sort_is_stable_for_equal_descriptions() {
    let catalog = Catalog::new(vec![
        Record::new("Ring", "Gold", vec![]),
        Record::new("Amulet", "Gem", vec![]),
        Record::new("Ring", "Silver", vec![]),
    ]);
    let keys: Vec<&str> = catalog.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["Gem", "Gold", "Silver"]);
}

#[test]
fn position_of_uses_identity() {
    let catalog = Catalog::new(vec![
        Record::new("Ring", "Gold", vec![]),
        Record::new("Ring", "Gold", vec![]),
    ]);
    let second = catalog.get(1).expect("second record");
    assert_eq!(catalog.position_of(second), Some(1));

    let detached = Record::new("Ring", "Gold", vec![]);
    assert_eq!(catalog.position_of(&detached), None);
}

#[test]
fn record_round_trips_through_json() {
    let record = Record::new(
        "Sword",
        "Ore",
        vec![
            Row::new(1, Quantity::numeric(10.0)),
            Row::new(2, Quantity::extra(Some("?".to_string()), Some(4.0))).with_info("event only"),
        ],
    )
    .with_slot("weapon");
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: Record = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}
