//! Entry model
//!
//! A single income or expense event. Entries are validated when they are
//! built and never change afterwards, so every field is read through an
//! accessor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Money;

/// Whether an entry brings money in or sends it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Sign used when rendering an entry of this kind
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    /// Lower-case noun used in user-facing messages
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Validation errors raised while constructing an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyDescription,
    EmptyCategory,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl EntryValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyDescription => "description",
            Self::EmptyCategory => "category",
            Self::NonPositiveAmount(_) | Self::AmountTooLarge(_) => "amount",
        }
    }
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount must not exceed {} (got {})",
                Money::MAX_AMOUNT,
                amount
            ),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// One recorded financial event
///
/// Serializable for export only; entries are never rebuilt from raw data
/// without going through [`Entry::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    id: EntryId,
    description: String,
    amount: Money,
    kind: EntryKind,
    category: String,
    date: NaiveDate,
}

impl Entry {
    /// Build a validated entry with a fresh identifier
    ///
    /// Description and category are trimmed. A blank description or category
    /// rejects the entry, as does an amount that is not positive or is above
    /// [`Money::MAX_AMOUNT`].
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        kind: EntryKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, EntryValidationError> {
        let description = description.into().trim().to_string();
        let category = category.into().trim().to_string();

        if description.is_empty() {
            return Err(EntryValidationError::EmptyDescription);
        }
        if !amount.is_positive() {
            return Err(EntryValidationError::NonPositiveAmount(amount));
        }
        if !amount.is_within_limit() {
            return Err(EntryValidationError::AmountTooLarge(amount));
        }
        if category.is_empty() {
            return Err(EntryValidationError::EmptyCategory);
        }

        Ok(Self {
            id: EntryId::new(),
            description,
            amount,
            kind,
            category,
            date,
        })
    }

    /// Shorthand for an income entry
    pub fn income(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, EntryValidationError> {
        Self::new(description, amount, EntryKind::Income, category, date)
    }

    /// Shorthand for an expense entry
    pub fn expense(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, EntryValidationError> {
        Self::new(description, amount, EntryKind::Expense, category, date)
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Always positive; the direction lives in [`Entry::kind`]
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Case-insensitive comparison against a category name
    pub fn in_category(&self, category: &str) -> bool {
        category_key(&self.category) == category_key(category)
    }

    /// Single-line rendering with a chosen currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!(
            "{} | {}{} | {} | {}",
            self.date,
            self.kind.sign(),
            self.amount.format_with_symbol(symbol),
            self.category,
            self.description
        )
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

/// Grouping key used for every case-insensitive category comparison
pub fn category_key(category: &str) -> String {
    category.trim().to_lowercase()
}
