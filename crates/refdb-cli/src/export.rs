//! Machine-readable export of the displayed set.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use refdb_core::running_totals;
use refdb_data::csv::{KIND_EXTRA, KIND_NUMERIC};
use refdb_model::{Quantity, Record};

/// Header of the CSV export.
///
/// Every column but `Total` is part of the CSV dataset layout, so an export
/// loads back with `--data` into the same records. `Record` keeps repeated
/// records apart, `Kind` keeps numeric-looking labels non-numeric, and a
/// record without rows is written as one line with an empty `Level`.
pub const CSV_HEADER: [&str; 10] = [
    "Record",
    "Description",
    "Key",
    "Slot",
    "Level",
    "Quantity",
    "Kind",
    "Extra Quantity",
    "Info",
    "Total",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
pub struct ExportRecord<'a> {
    pub description: &'a str,
    pub key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<&'a str>,
    pub rows: Vec<ExportRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ExportRow<'a> {
    pub level: i64,
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_quantity: Option<f64>,
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<&'a str>,
}

pub fn export_records<'a>(records: &[&'a Record]) -> Vec<ExportRecord<'a>> {
    records
        .iter()
        .copied()
        .map(|record| ExportRecord {
            description: &record.description,
            key: &record.key,
            slot: record.slot.as_deref(),
            rows: record
                .rows
                .iter()
                .zip(running_totals(&record.rows))
                .map(|(row, total)| ExportRow {
                    level: row.level,
                    quantity: row.quantity.as_numeric(),
                    quantity_label: row.quantity.label(),
                    extra_quantity: match &row.quantity {
                        Quantity::Numeric { .. } => None,
                        Quantity::Extra { amount, .. } => *amount,
                    },
                    total,
                    info: row.info.as_deref(),
                })
                .collect(),
        })
        .collect()
}

pub fn write_export<W: Write>(records: &[&Record], format: ExportFormat, out: W) -> Result<()> {
    let exported = export_records(records);
    match format {
        ExportFormat::Json => write_json(&exported, out),
        ExportFormat::Csv => write_csv(&exported, out),
    }
}

fn write_json<W: Write>(records: &[ExportRecord<'_>], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, records).context("write json export")?;
    writeln!(out).context("write json export")?;
    Ok(())
}

fn write_csv<W: Write>(records: &[ExportRecord<'_>], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER).context("write csv header")?;
    for (ordinal, record) in (1..).zip(records) {
        let lead = [
            ordinal.to_string(),
            record.description.to_string(),
            record.key.to_string(),
            record.slot.unwrap_or_default().to_string(),
        ];
        if record.rows.is_empty() {
            writer
                .write_record(lead.iter().map(String::as_str).chain([""; 6]))
                .with_context(|| format!("write csv row for {}", record.description))?;
            continue;
        }
        for row in &record.rows {
            let (quantity, kind) = match (row.quantity, row.quantity_label) {
                (Some(value), _) => (plain_number(value), KIND_NUMERIC),
                (None, Some(label)) => (label.to_string(), KIND_EXTRA),
                (None, None) => (String::new(), KIND_EXTRA),
            };
            let rest = [
                row.level.to_string(),
                quantity,
                kind.to_string(),
                row.extra_quantity.map(plain_number).unwrap_or_default(),
                row.info.unwrap_or_default().to_string(),
                row.total.map(plain_number).unwrap_or_default(),
            ];
            writer
                .write_record(lead.iter().chain(&rest))
                .with_context(|| format!("write csv row for {}", record.description))?;
        }
    }
    writer.flush().context("flush csv export")?;
    Ok(())
}

/// Shortest plain rendering: `10` rather than `10.0`, no grouping.
fn plain_number(value: f64) -> String {
    value.to_string()
}
