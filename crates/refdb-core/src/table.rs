//! Contents of an expanded section.

use refdb_model::{Quantity, Record};

use crate::format::format_grouped;
use crate::totals::running_totals;

pub const LEVEL_HEADER: &str = "Level";
pub const TOTAL_HEADER: &str = "Total Needed From Lv0";
pub const INFO_HEADER: &str = "Extra Info";

/// One display row: level, own quantity, running total and optional info.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub level: i64,
    /// The row's own quantity, formatted; the raw label for non-numeric
    /// quantities, empty when there is none.
    pub quantity: String,
    /// Running total so far, formatted; empty when it is not numeric.
    pub total: String,
    pub info: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordTable {
    pub header: [String; 4],
    pub rows: Vec<TableRow>,
}

impl RecordTable {
    /// Build the table for `record`. Totals are recomputed on every call.
    pub fn from_record(record: &Record) -> Self {
        let totals = running_totals(&record.rows);
        let rows = record
            .rows
            .iter()
            .zip(totals)
            .map(|(row, total)| TableRow {
                level: row.level,
                quantity: quantity_text(&row.quantity),
                total: total.map(format_grouped).unwrap_or_default(),
                info: row.info.clone(),
            })
            .collect();
        Self {
            header: [
                LEVEL_HEADER.to_string(),
                record.quantity_header(),
                TOTAL_HEADER.to_string(),
                INFO_HEADER.to_string(),
            ],
            rows,
        }
    }
}

fn quantity_text(quantity: &Quantity) -> String {
    match quantity {
        Quantity::Numeric { value } => format_grouped(*value),
        Quantity::Extra { label, .. } => label.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refdb_model::Row;

    #[test]
    fn builds_header_and_formatted_rows() {
        let record = Record::new(
            "Guild Hall",
            "Gold",
            vec![
                Row::new(1, Quantity::numeric(1000.0)),
                Row::new(2, Quantity::numeric(2500.0)).with_info("rank B"),
                Row::new(3, Quantity::extra(Some("Event".to_string()), Some(500.0))),
            ],
        );
        let table = RecordTable::from_record(&record);
        assert_eq!(
            table.header,
            [
                "Level".to_string(),
                "Gold needed".to_string(),
                "Total Needed From Lv0".to_string(),
                "Extra Info".to_string(),
            ]
        );
        let totals: Vec<&str> = table.rows.iter().map(|r| r.total.as_str()).collect();
        assert_eq!(totals, vec!["1,000", "3,500", "4,000"]);
        assert_eq!(table.rows[1].quantity, "2,500");
        assert_eq!(table.rows[1].info.as_deref(), Some("rank B"));
        assert_eq!(table.rows[2].quantity, "Event");
        assert_eq!(table.rows[0].info, None);
    }
}
