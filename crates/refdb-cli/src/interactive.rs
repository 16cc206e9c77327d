//! Line-oriented interactive filtering.
//!
//! Every input line replaces the query and re-renders the page, the terminal
//! counterpart of filtering on each keystroke. Lines starting with `:` are
//! commands:
//!
//! - `:expand N|SLOT|NAME` / `:expand all`
//! - `:collapse N` / `:collapse` (all)
//! - `:toggle N`
//! - `:quit`
//!
//! A query that itself starts with `:` is entered with a doubled colon:
//! `::x` searches for `:x`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use refdb_core::DatabaseView;
use refdb_model::Catalog;

use crate::commands::expand_reference;
use crate::render::{RenderOptions, render_page};

const PROMPT: &str = "Data Filter> ";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input<'a> {
    Query(&'a str),
    Expand(&'a str),
    ExpandAll,
    Collapse(Option<&'a str>),
    Toggle(&'a str),
    Quit,
    Unknown(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    if line.starts_with("::") {
        return Input::Query(&line[1..]);
    }
    let Some(command) = line.strip_prefix(':') else {
        return Input::Query(line);
    };
    let (name, argument) = match command.trim().split_once(char::is_whitespace) {
        Some((name, argument)) => (name, Some(argument.trim())),
        None => (command.trim(), None),
    };
    match (name, argument) {
        ("q" | "quit", _) => Input::Quit,
        ("expand", Some("all")) => Input::ExpandAll,
        ("expand", Some(reference)) => Input::Expand(reference),
        ("collapse", argument) => Input::Collapse(argument),
        ("toggle", Some(reference)) => Input::Toggle(reference),
        _ => Input::Unknown(command),
    }
}

/// Run the interactive loop until `:quit` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    catalog: &Catalog,
    mut input: R,
    out: &mut W,
    render: &RenderOptions,
) -> Result<()> {
    let mut view = DatabaseView::new(catalog);
    render_page(&view, render, out).context("render page")?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}").context("write prompt")?;
        out.flush().context("flush prompt")?;
        line.clear();
        if input.read_line(&mut line).context("read input")? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\r', '\n']);
        match parse_input(text) {
            Input::Quit => break,
            Input::Query(query) => view.filter(Some(query)),
            Input::Expand(reference) => {
                if !expand_reference(&mut view, reference) {
                    writeln!(out, "No section \"{reference}\"")?;
                    continue;
                }
            }
            Input::ExpandAll => view.expand_all(),
            Input::Collapse(None) => view.collapse_all(),
            Input::Collapse(Some(reference)) => {
                let collapsed = position(reference).is_some_and(|p| view.collapse(p));
                if !collapsed {
                    writeln!(out, "No expanded section \"{reference}\"")?;
                    continue;
                }
            }
            Input::Toggle(reference) => {
                if position(reference).and_then(|p| view.toggle(p)).is_none() {
                    writeln!(out, "No section \"{reference}\"")?;
                    continue;
                }
            }
            Input::Unknown(command) => {
                writeln!(out, "Unknown command \":{command}\"")?;
                continue;
            }
        }
        debug!(
            displayed = view.displayed().len(),
            found = view.search().found,
            "view updated"
        );
        render_page(&view, render, out).context("render page")?;
    }
    Ok(())
}

/// 1-based section number to a 0-based position.
fn position(reference: &str) -> Option<usize> {
    reference.parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_queries_and_commands() {
        assert_eq!(parse_input("sword"), Input::Query("sword"));
        assert_eq!(parse_input(""), Input::Query(""));
        assert_eq!(parse_input(":quit"), Input::Quit);
        assert_eq!(parse_input(":q"), Input::Quit);
        assert_eq!(parse_input(":expand all"), Input::ExpandAll);
        assert_eq!(parse_input(":expand 2"), Input::Expand("2"));
        assert_eq!(parse_input(":expand Shield Upgrade"), Input::Expand("Shield Upgrade"));
        assert_eq!(parse_input(":collapse"), Input::Collapse(None));
        assert_eq!(parse_input(":collapse 1"), Input::Collapse(Some("1")));
        assert_eq!(parse_input(":toggle 3"), Input::Toggle("3"));
        assert_eq!(parse_input(":bogus"), Input::Unknown("bogus"));
    }

    #[test]
    fn doubled_colon_searches_for_a_leading_colon() {
        assert_eq!(parse_input("::quit"), Input::Query(":quit"));
        assert_eq!(parse_input("::"), Input::Query(":"));
        assert_eq!(parse_input(":::x"), Input::Query("::x"));
    }

    #[test]
    fn position_is_one_based() {
        assert_eq!(position("1"), Some(0));
        assert_eq!(position("0"), None);
        assert_eq!(position("x"), None);
    }
}
