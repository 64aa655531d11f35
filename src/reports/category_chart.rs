//! Category Chart
//!
//! Ranks categories of one entry kind by total amount and draws a
//! proportional text bar for each.

use crate::display::report::{format_bar, format_percentage, separator};
use crate::ledger::Ledger;
use crate::models::{EntryKind, Money};

/// Bar length representing 100% of the total
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// One category line of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// Category name as first recorded
    pub category: String,
    pub total: Money,
    /// Share of the kind's total, 0-100
    pub percentage: f64,
    /// Number of bar cells, rounded half away from zero
    pub bar_len: usize,
}

/// Category chart for a single entry kind
#[derive(Debug, Clone)]
pub struct CategoryChart {
    pub kind: EntryKind,
    /// Rows sorted by descending total; equal totals keep first-seen order
    pub rows: Vec<ChartRow>,
    pub total: Money,
    pub width: usize,
}

impl CategoryChart {
    /// Build the chart with the default 40-cell bar
    pub fn generate(ledger: &Ledger, kind: EntryKind) -> Self {
        Self::with_width(ledger, kind, DEFAULT_BAR_WIDTH)
    }

    /// Build the chart with a custom bar width
    pub fn with_width(ledger: &Ledger, kind: EntryKind, width: usize) -> Self {
        let breakdown = ledger.category_breakdown(kind);
        let total: Money = breakdown.iter().map(|c| c.total).sum();

        let mut rows: Vec<ChartRow> = breakdown
            .into_iter()
            .map(|c| ChartRow {
                percentage: percentage_of(c.total, total),
                bar_len: bar_cells(c.total, total, width),
                category: c.category,
                total: c.total,
            })
            .collect();

        // sort_by is stable, so ties stay in first-seen order
        rows.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            kind,
            rows,
            total,
            width,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the chart for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return format!("No {} data to chart.", self.kind.noun());
        }

        let name_width = self
            .rows
            .iter()
            .map(|r| r.category.chars().count())
            .max()
            .unwrap_or(0)
            .max("Category".len());

        let mut output = String::new();
        output.push_str(&format!("{} by Category\n", self.kind));
        output.push_str(&separator(name_width + 24 + self.width));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<name_width$} {:>12} {:>7} {}\n",
                row.category,
                row.total.format_with_symbol(symbol),
                format_percentage(row.percentage),
                format_bar(row.bar_len),
                name_width = name_width
            ));
        }

        output.push_str(&separator(name_width + 24 + self.width));
        output.push('\n');
        output.push_str(&format!(
            "{:<name_width$} {:>12}",
            "Total",
            self.total.format_with_symbol(symbol),
            name_width = name_width
        ));

        output
    }

    /// The `limit` largest categories
    pub fn top_categories(&self, limit: usize) -> &[ChartRow] {
        &self.rows[..limit.min(self.rows.len())]
    }
}

fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    part.cents() as f64 * 100.0 / whole.cents() as f64
}

/// round(part * width / whole) with halves rounded away from zero, in
/// integer arithmetic so the result never depends on float error.
fn bar_cells(part: Money, whole: Money, width: usize) -> usize {
    let whole = i128::from(whole.cents());
    if whole <= 0 {
        return 0;
    }
    let scaled = i128::from(part.cents()) * width as i128 * 2;
    ((scaled + whole) / (2 * whole)).max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;
    use chrono::NaiveDate;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn ledger_with(expenses: &[(&str, i64)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (category, cents) in expenses {
            ledger.add(Entry::expense("item", Money::from_cents(*cents), *category, jan(1)).unwrap());
        }
        ledger
    }

    #[test]
    fn test_rows_sorted_descending() {
        let ledger = ledger_with(&[("Fun", 1000), ("Rent", 6000), ("Food", 3000)]);
        let chart = CategoryChart::generate(&ledger, EntryKind::Expense);

        let names: Vec<&str> = chart.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Fun"]);
        assert_eq!(chart.total, Money::from_cents(10000));
        assert_eq!(chart.rows[0].bar_len, 24);
        assert_eq!(chart.rows[1].bar_len, 12);
        assert_eq!(chart.rows[2].bar_len, 4);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ledger = ledger_with(&[("Books", 500), ("Games", 500), ("Rent", 2000)]);
        let chart = CategoryChart::generate(&ledger, EntryKind::Expense);

        let names: Vec<&str> = chart.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Books", "Games"]);
    }

    #[test]
    fn test_bar_rounds_half_away_from_zero() {
        // 1/16 of 40 cells = 2.5 -> 3; 15/16 = 37.5 -> 38
        assert_eq!(bar_cells(Money::from_cents(100), Money::from_cents(1600), 40), 3);
        assert_eq!(bar_cells(Money::from_cents(1500), Money::from_cents(1600), 40), 38);
        // 1/3 of 40 = 13.33 -> 13
        assert_eq!(bar_cells(Money::from_cents(100), Money::from_cents(300), 40), 13);
        assert_eq!(bar_cells(Money::from_cents(300), Money::from_cents(300), 40), 40);
    }

    #[test]
    fn test_single_category_fills_bar() {
        let ledger = ledger_with(&[("Rent", 120000)]);
        let text = ledger.category_chart(EntryKind::Expense);

        assert!(text.starts_with("Expense by Category\n"));
        assert!(text.contains("$1200.00"));
        assert!(text.contains("100.0%"));
        assert!(text.contains(&"█".repeat(40)));
    }

    #[test]
    fn test_percentage_has_one_decimal() {
        let ledger = ledger_with(&[("A", 100), ("B", 200)]);
        let text = CategoryChart::generate(&ledger, EntryKind::Expense).format_terminal("$");

        assert!(text.contains("66.7%"));
        assert!(text.contains("33.3%"));
    }

    #[test]
    fn test_chart_is_per_kind() {
        let mut ledger = ledger_with(&[("Food", 2500)]);
        ledger.add(Entry::income("Salary", Money::from_cents(50000), "Job", jan(2)).unwrap());

        let income = CategoryChart::generate(&ledger, EntryKind::Income);
        assert_eq!(income.rows.len(), 1);
        assert_eq!(income.rows[0].category, "Job");
        assert!(!ledger.category_chart(EntryKind::Income).contains("Food"));
    }

    #[test]
    fn test_empty_chart_sentinel() {
        let ledger = ledger_with(&[("Food", 2500)]);
        assert_eq!(
            ledger.category_chart(EntryKind::Income),
            "No income data to chart."
        );
    }

    #[test]
    fn test_custom_width_and_top() {
        let ledger = ledger_with(&[("A", 100), ("B", 300)]);
        let chart = CategoryChart::with_width(&ledger, EntryKind::Expense, 10);

        assert_eq!(chart.rows[0].bar_len, 8);
        assert_eq!(chart.rows[1].bar_len, 3);
        assert_eq!(chart.top_categories(1).len(), 1);
        assert_eq!(chart.top_categories(5).len(), 2);
    }
}
