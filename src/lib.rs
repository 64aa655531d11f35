//! Tally - terminal-based personal finance ledger
//!
//! Records income and expense entries in memory and derives totals,
//! category breakdowns, charts and monthly reports from them.
//!
//! # Architecture
//!
//! - `models`: money, entry identifiers and the entry value
//! - `ledger`: the append-only ledger and its queries
//! - `reports`: category charts and monthly summaries
//! - `display`: terminal formatting helpers
//! - `config`: path resolution and user settings
//! - `cli`: the interactive shell
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tally::{Entry, Ledger, Money};
//!
//! let mut ledger = Ledger::new();
//! let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! ledger.add(Entry::income("Salary", Money::from_cents(100_000), "Job", day)?);
//! ledger.add(Entry::expense("Groceries", Money::from_cents(20_000), "Food", day)?);
//!
//! assert_eq!(ledger.net_savings(), Money::from_cents(80_000));
//! # Ok::<(), tally::models::EntryValidationError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;

pub use error::{TallyError, TallyResult};
pub use ledger::{CategoryTotal, Ledger};
pub use models::{Entry, EntryKind, Money};
