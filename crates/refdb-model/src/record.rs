//! Records and per-level rows of the reference database.

use serde::{Deserialize, Serialize};

/// Required quantity for one level.
///
/// The quantity column of the source data is either a number or something
/// else (text, or nothing at all). Loaders resolve that once so nothing
/// downstream has to inspect raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Quantity {
    /// The row carries a numeric quantity.
    Numeric { value: f64 },
    /// The row carries no numeric quantity.
    ///
    /// `label` is the textual form of the raw quantity, if there was one.
    /// `amount` is the fallback that feeds running totals.
    Extra {
        label: Option<String>,
        amount: Option<f64>,
    },
}

impl Quantity {
    pub fn numeric(value: f64) -> Self {
        Self::Numeric { value }
    }

    pub fn extra(label: Option<String>, amount: Option<f64>) -> Self {
        Self::Extra { label, amount }
    }

    /// Value added to a running total: the quantity when numeric, otherwise
    /// the fallback amount.
    pub fn contribution(&self) -> Option<f64> {
        match self {
            Self::Numeric { value } => Some(*value),
            Self::Extra { amount, .. } => *amount,
        }
    }

    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric { value } => Some(*value),
            Self::Extra { .. } => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Numeric { .. } => None,
            Self::Extra { label, .. } => label.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub level: i64,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl Row {
    pub fn new(level: i64, quantity: Quantity) -> Self {
        Self {
            level,
            quantity,
            info: None,
        }
    }

    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

/// A top-level catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub description: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    pub rows: Vec<Row>,
}

impl Record {
    pub fn new(description: impl Into<String>, key: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            description: description.into(),
            key: key.into(),
            slot: None,
            rows,
        }
    }

    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    /// Lowercased `"{description} {key}"`, the text queries are matched against.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.description, self.key).to_lowercase()
    }

    /// Whether the search text contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.search_text().contains(needle)
    }

    /// Column header for the per-level quantity, e.g. `"Ore needed"`.
    pub fn quantity_header(&self) -> String {
        format!("{} needed", self.key)
    }
}
