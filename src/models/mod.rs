//! Core data models for Tally
//!
//! Money amounts, entry identifiers and the entry value itself.

pub mod entry;
pub mod ids;
pub mod money;

pub use entry::{category_key, Entry, EntryKind, EntryValidationError};
pub use ids::EntryId;
pub use money::{Money, MoneyParseError};
