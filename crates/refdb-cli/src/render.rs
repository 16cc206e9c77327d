//! Terminal rendering of the database page.

use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::trace;

use refdb_core::{DatabaseView, RecordTable, Section};

const HEADER_ICON: &str = "▤";
const HEADER_TITLE: &str = "DATABASE LISTS";
const FILTER_LABEL: &str = "Data Filter";
const COLLAPSED_MARKER: &str = "▸";
const EXPANDED_MARKER: &str = "▾";

/// Whether tables carry ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Styling {
    /// Style only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub styling: Styling,
    pub width: u16,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            styling: Styling::Auto,
            width: 120,
        }
    }
}

/// Render the whole page: header, filter line, no-results message and the
/// sections of the displayed set.
pub fn render_page<W: Write>(
    view: &DatabaseView<'_>,
    options: &RenderOptions,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", header_table(options))?;
    if let Some(query) = view.search().query.as_deref().filter(|q| !q.is_empty()) {
        writeln!(out, "{FILTER_LABEL}: {query}")?;
    }
    if let Some(message) = view.search().no_results_message() {
        writeln!(out)?;
        writeln!(out, "{message}")?;
        return Ok(());
    }
    let sections = view.sections();
    trace!(sections = sections.len(), "rendering sections");
    writeln!(out)?;
    for (position, section) in sections.iter().enumerate() {
        render_section(position, section, options, out)?;
    }
    Ok(())
}

/// Render one accordion section; the table follows only when expanded.
pub fn render_section<W: Write>(
    position: usize,
    section: &Section<'_>,
    options: &RenderOptions,
    out: &mut W,
) -> io::Result<()> {
    let marker = if section.is_expanded() {
        EXPANDED_MARKER
    } else {
        COLLAPSED_MARKER
    };
    writeln!(out, "[{}] {marker} {}", position + 1, section.title())?;
    if let Some(table) = &section.table {
        writeln!(out, "{}", record_table(table, options))?;
    }
    Ok(())
}

fn header_table(options: &RenderOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(format!("{HEADER_ICON} {HEADER_TITLE}"))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);
    apply_styling(&mut table, options.styling);
    table
}

/// Build the level table of an expanded section.
pub fn record_table(contents: &RecordTable, options: &RenderOptions) -> Table {
    let mut table = Table::new();
    table.set_header(
        contents
            .header
            .iter()
            .map(String::as_str)
            .map(header_cell)
            .collect::<Vec<_>>(),
    );
    apply_record_table_style(&mut table, options);
    for row in &contents.rows {
        let mut cells = vec![
            Cell::new(row.level),
            Cell::new(&row.quantity),
            total_cell(&row.total),
        ];
        if let Some(info) = &row.info {
            cells.push(Cell::new(info).fg(Color::Yellow));
        }
        table.add_row(cells);
    }
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    table
}

fn apply_record_table_style(table: &mut Table, options: &RenderOptions) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(options.width);
    apply_styling(table, options.styling);
}

fn apply_styling(table: &mut Table, styling: Styling) {
    match styling {
        Styling::Auto => {}
        Styling::Always => {
            table.enforce_styling();
        }
        Styling::Never => {
            table.force_no_tty();
        }
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn total_cell(total: &str) -> Cell {
    if total.is_empty() {
        Cell::new("")
    } else {
        Cell::new(total).add_attribute(Attribute::Bold)
    }
}
