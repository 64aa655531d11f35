//! Entry display formatting
//!
//! Renders entry lists as terminal tables for the shell.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::Entry;

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl EntryRow {
    fn from_entry(entry: &Entry, symbol: &str) -> Self {
        Self {
            date: entry.date().to_string(),
            amount: format!(
                "{}{}",
                entry.kind().sign(),
                entry.amount().format_with_symbol(symbol)
            ),
            category: entry.category().to_string(),
            description: truncate(entry.description(), DESCRIPTION_WIDTH),
        }
    }
}

/// Format a list of entries as a table
pub fn format_entry_table<'a, I>(entries: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let rows: Vec<EntryRow> = entries
        .into_iter()
        .map(|e| EntryRow::from_entry(e, symbol))
        .collect();

    if rows.is_empty() {
        return "No entries found.".to_string();
    }

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::single(1), Alignment::right())
        .to_string()
}

/// Format entries one per line using the single-line entry rendering
pub fn format_entry_lines<'a, I>(entries: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let lines: Vec<String> = entries
        .into_iter()
        .map(|e| e.format_with_symbol(symbol))
        .collect();

    if lines.is_empty() {
        "No entries found.".to_string()
    } else {
        lines.join("\n")
    }
}
