use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use refdb_core::DatabaseView;
use refdb_data::{load_from_source, resolve_data_source};
use refdb_model::Catalog;

use crate::export::{ExportFormat, write_export};
use crate::render::{RenderOptions, render_page};

/// Options for a single render of the page.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub query: Option<String>,
    /// Sections to expand: 1-based position, slot, or description.
    pub expand: Vec<String>,
    pub expand_all: bool,
}

/// Load the catalog from `--data`, `REFDB_DATA` or the embedded dataset.
pub fn load_catalog(data: Option<PathBuf>) -> Result<Catalog> {
    let source = resolve_data_source(data);
    load_from_source(&source).with_context(|| format!("load dataset ({source:?})"))
}

/// Render the page once. Returns whether the query found anything.
pub fn run_list<W: Write>(
    catalog: &Catalog,
    options: &ListOptions,
    render: &RenderOptions,
    out: &mut W,
) -> Result<bool> {
    let span = info_span!("list", query = options.query.as_deref().unwrap_or_default());
    let _guard = span.enter();

    let mut view = DatabaseView::new(catalog);
    view.filter(options.query.as_deref());
    if options.expand_all {
        view.expand_all();
    }
    for reference in &options.expand {
        if !expand_reference(&mut view, reference) {
            warn!(section = %reference, "no displayed section matches");
        }
    }
    render_page(&view, render, out).context("render page")?;
    info!(
        displayed = view.displayed().len(),
        found = view.search().found,
        "list rendered"
    );
    Ok(view.search().found)
}

/// Render the page with the record named `name` expanded.
///
/// Returns false when no record has that description.
pub fn run_show<W: Write>(
    catalog: &Catalog,
    name: &str,
    render: &RenderOptions,
    out: &mut W,
) -> Result<bool> {
    let mut view = DatabaseView::new(catalog);
    view.filter(Some(name));
    if view.expand_named(name) == 0 {
        warn!(name, "no record with this description");
        return Ok(false);
    }
    let sections: Vec<_> = view
        .sections()
        .into_iter()
        .filter(|section| section.is_expanded())
        .collect();
    for (position, section) in sections.iter().enumerate() {
        crate::render::render_section(position, section, render, out).context("render section")?;
    }
    Ok(true)
}

/// Export the records matching `query`. Returns the number of records written.
pub fn run_export<W: Write>(
    catalog: &Catalog,
    query: Option<&str>,
    format: ExportFormat,
    out: W,
) -> Result<usize> {
    let mut view = DatabaseView::new(catalog);
    view.filter(query);
    write_export(view.displayed(), format, out)?;
    let count = view.displayed().len();
    info!(records = count, ?format, "export written");
    Ok(count)
}

/// Expand by 1-based position, then slot, then description.
pub(crate) fn expand_reference(view: &mut DatabaseView<'_>, reference: &str) -> bool {
    if let Ok(position) = reference.parse::<usize>()
        && position > 0
        && view.expand(position - 1)
    {
        return true;
    }
    view.expand_slot(reference) > 0 || view.expand_named(reference) > 0
}
