//! Monthly Report
//!
//! Buckets entries by calendar month and shows income, expenses and the
//! difference for each month, oldest first.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{Datelike, NaiveDate};

use crate::display::report::separator;
use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;
use crate::models::{EntryKind, Money};

const TABLE_WIDTH: usize = 62;

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRow {
    pub year: i32,
    pub month: u32,
    pub income: Money,
    pub expenses: Money,
    pub entry_count: usize,
}

impl MonthRow {
    fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            income: Money::zero(),
            expenses: Money::zero(),
            entry_count: 0,
        }
    }

    /// Income minus expenses for the month
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }

    /// Human-readable month name, e.g. "January 2024"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| self.key())
    }

    /// Sortable key, e.g. "2024-01"
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Month-by-month summary of a ledger
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// One row per month that has entries, ordered by year then month
    pub rows: Vec<MonthRow>,
    pub total_income: Money,
    pub total_expenses: Money,
}

impl MonthlyReport {
    /// Generate the report from the current ledger contents
    pub fn generate(ledger: &Ledger) -> Self {
        let mut months: BTreeMap<(i32, u32), MonthRow> = BTreeMap::new();

        for entry in ledger.entries() {
            let date = entry.date();
            let row = months
                .entry((date.year(), date.month()))
                .or_insert_with(|| MonthRow::new(date.year(), date.month()));

            match entry.kind() {
                EntryKind::Income => row.income += entry.amount(),
                EntryKind::Expense => row.expenses += entry.amount(),
            }
            row.entry_count += 1;
        }

        let rows: Vec<MonthRow> = months.into_values().collect();
        let total_income = rows.iter().map(|r| r.income).sum();
        let total_expenses = rows.iter().map(|r| r.expenses).sum();

        Self {
            rows,
            total_income,
            total_expenses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_net(&self) -> Money {
        self.total_income - self.total_expenses
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return "No entries recorded yet.".to_string();
        }

        let mut output = String::new();
        output.push_str("Monthly Report\n");
        output.push_str(&"=".repeat(TABLE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expenses", "Savings"
        ));
        output.push_str(&separator(TABLE_WIDTH));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<16} {:>14} {:>14} {:>14}\n",
                row.label(),
                row.income.format_with_symbol(symbol),
                row.expenses.format_with_symbol(symbol),
                row.net().format_with_symbol(symbol)
            ));
        }

        output.push_str(&separator(TABLE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14} {:>14} {:>14}",
            "Total",
            self.total_income.format_with_symbol(symbol),
            self.total_expenses.format_with_symbol(symbol),
            self.total_net().format_with_symbol(symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Month,Income,Expenses,Net,Entries").map_err(export_error)?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{},{},{}",
                row.key(),
                row.income.format_plain(),
                row.expenses.format_plain(),
                row.net().format_plain(),
                row.entry_count
            )
            .map_err(export_error)?;
        }

        Ok(())
    }
}

fn export_error(err: std::io::Error) -> TallyError {
    TallyError::Io(format!("Failed to write report: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_month_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        // February inserted first to show ordering comes from the date
        ledger.add(Entry::expense("Rent", Money::from_cents(90000), "Housing", date(2024, 2, 1)).unwrap());
        ledger.add(Entry::income("Salary", Money::from_cents(300000), "Job", date(2024, 1, 15)).unwrap());
        ledger.add(Entry::expense("Food", Money::from_cents(25000), "Food", date(2024, 1, 20)).unwrap());
        ledger.add(Entry::income("Salary", Money::from_cents(300000), "Job", date(2024, 2, 15)).unwrap());
        ledger
    }

    #[test]
    fn test_rows_are_ordered_by_month() {
        let report = MonthlyReport::generate(&two_month_ledger());

        assert_eq!(report.rows.len(), 2);
        let jan = &report.rows[0];
        let feb = &report.rows[1];

        assert_eq!((jan.year, jan.month), (2024, 1));
        assert_eq!(jan.income.cents(), 300000);
        assert_eq!(jan.expenses.cents(), 25000);
        assert_eq!(jan.net().cents(), 275000);
        assert_eq!(jan.entry_count, 2);

        assert_eq!((feb.year, feb.month), (2024, 2));
        assert_eq!(feb.income.cents(), 300000);
        assert_eq!(feb.expenses.cents(), 90000);
        assert_eq!(feb.net().cents(), 210000);
    }

    #[test]
    fn test_year_boundary_ordering() {
        let mut ledger = Ledger::new();
        ledger.add(Entry::income("a", Money::from_cents(100), "X", date(2025, 1, 1)).unwrap());
        ledger.add(Entry::income("b", Money::from_cents(100), "X", date(2024, 12, 31)).unwrap());

        let report = MonthlyReport::generate(&ledger);
        let keys: Vec<String> = report.rows.iter().map(MonthRow::key).collect();
        assert_eq!(keys, vec!["2024-12", "2025-01"]);
    }

    #[test]
    fn test_format_terminal() {
        let text = two_month_ledger().monthly_report();

        let jan = text.find("January 2024").unwrap();
        let feb = text.find("February 2024").unwrap();
        assert!(jan < feb);
        assert!(text.contains("$2750.00"));
        assert!(text.contains("$2100.00"));
        assert!(text.lines().last().unwrap().starts_with("Total"));
    }

    #[test]
    fn test_negative_month() {
        let mut ledger = Ledger::new();
        ledger.add(Entry::expense("TV", Money::from_cents(50000), "Tech", date(2024, 3, 3)).unwrap());

        let report = MonthlyReport::generate(&ledger);
        assert_eq!(report.rows[0].net().cents(), -50000);
        assert!(report.format_terminal("$").contains("-$500.00"));
    }

    #[test]
    fn test_empty_sentinel() {
        let report = MonthlyReport::generate(&Ledger::new());
        assert!(report.is_empty());
        assert_eq!(report.format_terminal("$"), "No entries recorded yet.");
    }

    #[test]
    fn test_export_csv() {
        let report = MonthlyReport::generate(&two_month_ledger());
        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();

        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Month,Income,Expenses,Net,Entries");
        assert_eq!(lines[1], "2024-01,3000.00,250.00,2750.00,2");
        assert_eq!(lines[2], "2024-02,3000.00,900.00,2100.00,2");
    }
}
