//! JSON dataset parsing.
//!
//! The JSON layout is an array of records:
//!
//! ```json
//! [{ "desc": "Sword", "key": "Ore", "slot": 1,
//!    "info": [{ "level": 1, "quantity": 10 },
//!             { "level": 2, "quantity": "event", "extraQuantity": 5, "info": "limited" }] }]
//! ```
//!
//! `quantity` may be a number, a string or null; anything that is not a
//! number is resolved into [`Quantity::Extra`] here.

use serde::Deserialize;
use serde_json::Value;

use refdb_model::{Quantity, Record, Row};

#[derive(Debug, Deserialize)]
struct RawRecord {
    desc: String,
    key: String,
    #[serde(default)]
    slot: Option<Value>,
    #[serde(default)]
    info: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    level: i64,
    #[serde(default)]
    quantity: Value,
    #[serde(default, rename = "extraQuantity")]
    extra_quantity: Option<f64>,
    #[serde(default)]
    info: Option<String>,
}

/// Parse a JSON dataset into records, in file order.
pub fn parse_records(text: &str) -> serde_json::Result<Vec<Record>> {
    let raw: Vec<RawRecord> = serde_json::from_str(text)?;
    Ok(raw.into_iter().map(RawRecord::into_record).collect())
}

impl RawRecord {
    fn into_record(self) -> Record {
        Record {
            description: self.desc,
            key: self.key,
            slot: self.slot.and_then(value_text),
            rows: self.info.into_iter().map(RawRow::into_row).collect(),
        }
    }
}

impl RawRow {
    fn into_row(self) -> Row {
        let quantity = match self.quantity.as_f64() {
            Some(value) => Quantity::numeric(value),
            None => Quantity::extra(value_text(self.quantity), self.extra_quantity),
        };
        Row {
            level: self.level,
            quantity,
            info: self.info.filter(|info| !info.is_empty()),
        }
    }
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_numeric_and_extra_quantities() {
        let records = parse_records(
            r#"[{"desc":"Sword","key":"Ore","slot":3,"info":[
                {"level":1,"quantity":10},
                {"level":2,"quantity":"event","extraQuantity":5,"info":"limited"},
                {"level":3,"quantity":null}
            ]}]"#,
        )
        .expect("parse");
        let sword = &records[0];
        assert_eq!(sword.slot.as_deref(), Some("3"));
        assert_eq!(sword.rows[0].quantity, Quantity::numeric(10.0));
        assert_eq!(
            sword.rows[1].quantity,
            Quantity::extra(Some("event".to_string()), Some(5.0))
        );
        assert_eq!(sword.rows[1].info.as_deref(), Some("limited"));
        assert_eq!(sword.rows[2].quantity, Quantity::extra(None, None));
    }

    #[test]
    fn empty_info_is_treated_as_absent() {
        let records =
            parse_records(r#"[{"desc":"Bow","key":"Wood","info":[{"level":1,"quantity":1,"info":""}]}]"#)
                .expect("parse");
        assert_eq!(records[0].rows[0].info, None);
    }
}
