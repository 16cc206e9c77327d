//! CSV dataset parsing.
//!
//! One line per level:
//!
//! ```text
//! Description,Key,Slot,Level,Quantity,Extra Quantity,Info
//! Sword,Ore,1,1,10,,
//! Sword,Ore,1,2,event,5,limited
//! ```
//!
//! Consecutive lines sharing a description and key make up one record.
//!
//! Two optional columns make the layout lossless:
//!
//! - `Record`: an ordinal per record. When present, a change of ordinal
//!   starts a new record even if description and key repeat.
//! - `Kind`: `numeric` or `extra`. With `extra` the quantity is kept as a
//!   label even when it looks like a number.
//!
//! A line with an empty `Level` declares a record without rows.

use std::io::Read;

use ::csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use refdb_model::{Quantity, Record, Row};

/// `Kind` value marking a non-numeric quantity.
pub const KIND_EXTRA: &str = "extra";
/// `Kind` value marking a numeric quantity.
pub const KIND_NUMERIC: &str = "numeric";

#[derive(Debug, Deserialize)]
struct CsvLine {
    #[serde(rename = "Record", default)]
    record: Option<u64>,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Slot", default)]
    slot: Option<String>,
    #[serde(rename = "Level", default)]
    level: Option<i64>,
    #[serde(rename = "Quantity", default)]
    quantity: Option<String>,
    #[serde(rename = "Kind", default)]
    kind: Option<String>,
    #[serde(rename = "Extra Quantity", default)]
    extra_quantity: Option<f64>,
    #[serde(rename = "Info", default)]
    info: Option<String>,
}

impl CsvLine {
    fn continues(&self, current: &Record, current_ordinal: Option<u64>) -> bool {
        current_ordinal == self.record
            && current.description == self.description
            && current.key == self.key
    }
}

/// Parse a CSV dataset into records, in file order.
pub fn parse_records<R: Read>(reader: R) -> ::csv::Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut records: Vec<Record> = Vec::new();
    let mut current_ordinal = None;
    for line in reader.deserialize::<CsvLine>() {
        let line = line?;
        let row = line.level.map(|level| Row {
            level,
            quantity: resolve_quantity(
                line.quantity.clone(),
                line.kind.as_deref(),
                line.extra_quantity,
            ),
            info: line.info.clone().filter(|info| !info.is_empty()),
        });
        match records.last_mut() {
            Some(current) if line.continues(current, current_ordinal) => {
                current.rows.extend(row);
            }
            _ => {
                current_ordinal = line.record;
                records.push(Record {
                    description: line.description,
                    key: line.key,
                    slot: line.slot.filter(|slot| !slot.is_empty()),
                    rows: row.into_iter().collect(),
                });
            }
        }
    }
    Ok(records)
}

fn resolve_quantity(raw: Option<String>, kind: Option<&str>, extra: Option<f64>) -> Quantity {
    let raw = raw.filter(|value| !value.is_empty());
    if kind.is_some_and(|kind| kind.eq_ignore_ascii_case(KIND_EXTRA)) {
        return Quantity::extra(raw, extra);
    }
    match raw.as_deref().map(str::parse::<f64>) {
        Some(Ok(value)) => Quantity::numeric(value),
        _ => Quantity::extra(raw, extra),
    }
}
