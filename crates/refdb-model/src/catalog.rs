use serde::Serialize;

use crate::record::Record;

/// The full, immutable source sequence of records.
///
/// Records are sorted by description once, when the catalog is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_by(|a, b| a.description.cmp(&b.description));
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Position of `record` in the catalog, by identity rather than value.
    pub fn position_of(&self, record: &Record) -> Option<usize> {
        self.records
            .iter()
            .position(|candidate| std::ptr::eq(candidate, record))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
