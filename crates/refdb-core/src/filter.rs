use tracing::debug;

use refdb_model::Record;

/// Outcome of the last filter action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub found: bool,
    pub query: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            found: true,
            query: None,
        }
    }
}

impl SearchState {
    /// Message shown when the last query matched nothing.
    pub fn no_results_message(&self) -> Option<String> {
        if self.found {
            return None;
        }
        Some(format!(
            "There are not results for \"{}\"",
            self.query.as_deref().unwrap_or_default()
        ))
    }
}

/// Filter `records` by a free-text query.
///
/// An empty or absent query selects every record. Otherwise a record is kept
/// when its lowercased `"{description} {key}"` contains the lowercased query.
/// Source order is preserved.
pub fn filter_records<'a>(
    records: &'a [Record],
    query: Option<&str>,
) -> (Vec<&'a Record>, SearchState) {
    let (indices, state) = filter_indices(records, query);
    let matches = indices.into_iter().map(|index| &records[index]).collect();
    (matches, state)
}

/// Like [`filter_records`], but yields the positions of the matches in
/// `records`.
pub fn filter_indices(records: &[Record], query: Option<&str>) -> (Vec<usize>, SearchState) {
    let query = match query {
        Some(text) if !text.is_empty() => text,
        other => {
            let state = SearchState {
                found: true,
                query: other.map(str::to_string),
            };
            return ((0..records.len()).collect(), state);
        }
    };

    let needle = query.to_lowercase();
    let matches: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.matches(&needle))
        .map(|(index, _)| index)
        .collect();
    debug!(query, matches = matches.len(), total = records.len(), "filter applied");

    let state = SearchState {
        found: !matches.is_empty(),
        query: Some(query.to_string()),
    };
    (matches, state)
}
