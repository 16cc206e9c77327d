use std::collections::BTreeSet;

use refdb_model::{Catalog, Record};

use crate::filter::{SearchState, filter_indices};
use crate::table::RecordTable;

/// One accordion section of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub record: &'a Record,
    /// Position of the record in the catalog.
    pub index: usize,
    /// Present only while the section is expanded.
    pub table: Option<RecordTable>,
}

impl Section<'_> {
    pub fn title(&self) -> &str {
        &self.record.description
    }

    pub fn is_expanded(&self) -> bool {
        self.table.is_some()
    }
}

/// Page state over a catalog: the displayed subset, the search status and
/// which sections are expanded.
///
/// The displayed set always borrows from the catalog. Expansion is tracked by
/// catalog position, so a section stays open across queries that keep it
/// visible.
#[derive(Debug, Clone)]
pub struct DatabaseView<'a> {
    catalog: &'a Catalog,
    displayed: Vec<&'a Record>,
    /// Catalog position of each displayed record.
    indices: Vec<usize>,
    search: SearchState,
    expanded: BTreeSet<usize>,
}

impl<'a> DatabaseView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            displayed: catalog.iter().collect(),
            indices: (0..catalog.len()).collect(),
            search: SearchState::default(),
            expanded: BTreeSet::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn displayed(&self) -> &[&'a Record] {
        &self.displayed
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Re-filter the full catalog and replace the displayed set.
    pub fn filter(&mut self, query: Option<&str>) {
        let records = self.catalog.records();
        let (indices, search) = filter_indices(records, query);
        self.displayed = indices.iter().map(|&index| &records[index]).collect();
        self.indices = indices;
        self.search = search;
    }

    /// Expand the section at `position` in the displayed set.
    ///
    /// Returns false when there is no such section.
    pub fn expand(&mut self, position: usize) -> bool {
        match self.catalog_index(position) {
            Some(index) => {
                self.expanded.insert(index);
                true
            }
            None => false,
        }
    }

    /// Collapse the section at `position` in the displayed set.
    pub fn collapse(&mut self, position: usize) -> bool {
        match self.catalog_index(position) {
            Some(index) => self.expanded.remove(&index),
            None => false,
        }
    }

    /// Flip the section at `position`; returns whether it is now expanded.
    pub fn toggle(&mut self, position: usize) -> Option<bool> {
        let index = self.catalog_index(position)?;
        if self.expanded.remove(&index) {
            Some(false)
        } else {
            self.expanded.insert(index);
            Some(true)
        }
    }

    /// Expand every displayed section whose slot equals `slot`.
    pub fn expand_slot(&mut self, slot: &str) -> usize {
        self.expand_where(|record| record.slot.as_deref() == Some(slot))
    }

    /// Expand every displayed section whose description equals `name`,
    /// ignoring case.
    pub fn expand_named(&mut self, name: &str) -> usize {
        let name = name.to_lowercase();
        self.expand_where(|record| record.description.to_lowercase() == name)
    }

    pub fn expand_all(&mut self) {
        self.expanded.extend(self.indices.iter().copied());
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Sections for the displayed set, in display order.
    pub fn sections(&self) -> Vec<Section<'a>> {
        self.displayed
            .iter()
            .copied()
            .zip(self.indices.iter().copied())
            .map(|(record, index)| Section {
                record,
                index,
                table: self
                    .expanded
                    .contains(&index)
                    .then(|| RecordTable::from_record(record)),
            })
            .collect()
    }

    fn expand_where(&mut self, predicate: impl Fn(&Record) -> bool) -> usize {
        let indices: Vec<usize> = self
            .displayed
            .iter()
            .zip(&self.indices)
            .filter(|&(record, _)| predicate(record))
            .map(|(_, &index)| index)
            .collect();
        let count = indices.len();
        self.expanded.extend(indices);
        count
    }

    fn catalog_index(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }
}
