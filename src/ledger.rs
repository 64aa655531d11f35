//! The in-memory ledger
//!
//! An append-only sequence of entries plus every derived query. Queries are
//! recomputed from the entry list on each call; nothing is cached.
//!
//! Categories compare case-insensitively. Wherever categories are grouped,
//! the casing of the first entry seen in a group is the one reported.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{TallyError, TallyResult};
use crate::models::{category_key, Entry, EntryKind, Money};
use crate::reports::{CategoryChart, MonthlyReport};

/// Total amount recorded against one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name as first recorded
    pub category: String,
    pub total: Money,
}

/// Append-only collection of entries
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; it is visible to every later query
    pub fn add(&mut self, entry: Entry) {
        debug!(
            id = %entry.id(),
            kind = %entry.kind(),
            amount = %entry.amount(),
            category = entry.category(),
            "entry added"
        );
        self.entries.push(entry);
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_income(&self) -> Money {
        self.total_for_kind(EntryKind::Income)
    }

    pub fn total_expenses(&self) -> Money {
        self.total_for_kind(EntryKind::Expense)
    }

    /// Sum of all amounts of one kind
    pub fn total_for_kind(&self, kind: EntryKind) -> Money {
        self.entries
            .iter()
            .filter(|e| e.kind() == kind)
            .map(Entry::amount)
            .sum()
    }

    /// Income minus expenses; negative when spending exceeds income
    pub fn net_savings(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Entries whose category matches, ignoring case, in insertion order
    pub fn entries_by_category(&self, category: &str) -> TallyResult<Vec<&Entry>> {
        require_category(category)?;
        Ok(self
            .entries
            .iter()
            .filter(|e| e.in_category(category))
            .collect())
    }

    /// Sum of amounts matching both the category (ignoring case) and the kind
    pub fn total_by_category(&self, category: &str, kind: EntryKind) -> TallyResult<Money> {
        require_category(category)?;
        Ok(self
            .entries
            .iter()
            .filter(|e| e.kind() == kind && e.in_category(category))
            .map(Entry::amount)
            .sum())
    }

    /// Distinct category names
    ///
    /// Names that differ only in case count once and keep the casing of their
    /// first entry. The result is sorted ascending by the trimmed, lowercased
    /// name, so `"Bonus"`, `"food"` and `"Rent"` come out in that order.
    pub fn all_categories(&self) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut categories: Vec<String> = Vec::new();

        for entry in &self.entries {
            if seen.insert(category_key(entry.category())) {
                categories.push(entry.category().to_string());
            }
        }

        categories.sort_by_cached_key(|name| category_key(name));
        categories
    }

    /// Per-category totals for one kind, in first-seen order
    pub fn category_breakdown(&self, kind: EntryKind) -> Vec<CategoryTotal> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for entry in self.entries.iter().filter(|e| e.kind() == kind) {
            let slot = *index
                .entry(category_key(entry.category()))
                .or_insert_with(|| {
                    totals.push(CategoryTotal {
                        category: entry.category().to_string(),
                        total: Money::zero(),
                    });
                    totals.len() - 1
                });
            totals[slot].total += entry.amount();
        }

        totals
    }

    /// Expense category with the largest total
    ///
    /// Ties go to the category seen first. Returns `("None", $0.00)` when
    /// nothing has been spent.
    pub fn highest_spending_category(&self) -> (String, Money) {
        let mut best: Option<CategoryTotal> = None;

        for candidate in self.category_breakdown(EntryKind::Expense) {
            match &best {
                Some(current) if candidate.total <= current.total => {}
                _ => best = Some(candidate),
            }
        }

        best.map(|b| (b.category, b.total))
            .unwrap_or_else(|| ("None".to_string(), Money::zero()))
    }

    /// Entries ordered by date; equal dates keep insertion order
    pub fn sorted_by_date(&self, ascending: bool) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        if ascending {
            sorted.sort_by_key(|e| e.date());
        } else {
            sorted.sort_by(|a, b| b.date().cmp(&a.date()));
        }
        sorted
    }

    /// Entries ordered by amount; equal amounts keep insertion order
    pub fn sorted_by_amount(&self, ascending: bool) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        if ascending {
            sorted.sort_by_key(|e| e.amount());
        } else {
            sorted.sort_by(|a, b| b.amount().cmp(&a.amount()));
        }
        sorted
    }

    /// Entries ordered by category ignoring case; ties keep insertion order
    pub fn sorted_by_category(&self) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by_cached_key(|e| category_key(e.category()));
        sorted
    }

    /// Text chart of the breakdown for `kind`, using the default `$` symbol
    pub fn category_chart(&self, kind: EntryKind) -> String {
        CategoryChart::generate(self, kind).format_terminal("$")
    }

    /// Month-by-month income/expense table, using the default `$` symbol
    pub fn monthly_report(&self) -> String {
        MonthlyReport::generate(self).format_terminal("$")
    }
}

fn require_category(category: &str) -> TallyResult<()> {
    if category.trim().is_empty() {
        return Err(TallyError::empty_category());
    }
    Ok(())
}
