//! Property tests for filtering and running totals.

use proptest::prelude::*;

use refdb_core::{filter_records, running_totals};
use refdb_model::{Quantity, Record, Row};

fn quantity_strategy() -> impl Strategy<Value = Quantity> {
    prop_oneof![
        (0u32..10_000).prop_map(|value| Quantity::numeric(f64::from(value))),
        (0u32..10_000).prop_map(|amount| Quantity::extra(Some("Event".to_string()), Some(f64::from(amount)))),
    ]
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[A-Za-z ]{1,12}",
        "[A-Za-z]{1,6}",
        prop::collection::vec(quantity_strategy(), 0..8),
    )
        .prop_map(|(description, key, quantities)| {
            let rows = quantities
                .into_iter()
                .enumerate()
                .map(|(level, quantity)| Row::new(level as i64 + 1, quantity))
                .collect();
            Record::new(description, key, rows)
        })
}

fn contribution(quantity: &Quantity) -> f64 {
    match quantity {
        Quantity::Numeric { value } => *value,
        Quantity::Extra { amount, .. } => amount.unwrap_or_default(),
    }
}

proptest! {
    #[test]
    fn empty_query_selects_everything(records in prop::collection::vec(record_strategy(), 0..10)) {
        let (shown, state) = filter_records(&records, Some(""));
        prop_assert_eq!(shown.len(), records.len());
        prop_assert!(state.found);
    }

    #[test]
    fn filter_partitions_by_substring(
        records in prop::collection::vec(record_strategy(), 0..10),
        query in "[A-Za-z ]{1,3}",
    ) {
        let (shown, state) = filter_records(&records, Some(&query));
        let needle = query.to_lowercase();
        for record in &records {
            let composite = format!("{} {}", record.description, record.key).to_lowercase();
            let is_shown = shown.iter().any(|candidate| std::ptr::eq(*candidate, record));
            prop_assert_eq!(is_shown, composite.contains(&needle));
        }
        prop_assert_eq!(state.found, !shown.is_empty());
        prop_assert_eq!(state.query.as_deref(), Some(query.as_str()));
    }

    #[test]
    fn filter_preserves_source_order(
        records in prop::collection::vec(record_strategy(), 0..10),
        query in "[a-z]{1,2}",
    ) {
        let (shown, _) = filter_records(&records, Some(&query));
        let positions: Vec<usize> = shown
            .iter()
            .map(|record| records.iter().position(|r| std::ptr::eq(r, *record)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn running_total_is_prefix_sum(record in record_strategy()) {
        let totals = running_totals(&record.rows);
        prop_assert_eq!(totals.len(), record.rows.len());
        for (k, total) in totals.iter().enumerate() {
            let expected: f64 = record.rows[..=k]
                .iter()
                .map(|row| contribution(&row.quantity))
                .sum();
            prop_assert_eq!(*total, Some(expected));
        }
    }
}
