//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries and reports for the terminal.

pub mod entry;
pub mod report;

pub use entry::{format_entry_lines, format_entry_table};
