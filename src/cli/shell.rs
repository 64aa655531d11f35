//! Interactive menu shell
//!
//! Reads a menu choice, collects and validates input, then calls the ledger
//! and prints what it returns. The shell owns the session's only ledger.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use super::prompt::Prompter;
use crate::config::Settings;
use crate::display::report::format_percentage;
use crate::display::{format_entry_lines, format_entry_table};
use crate::error::{TallyError, TallyResult};
use crate::ledger::Ledger;
use crate::models::{Entry, EntryKind};
use crate::reports::{CategoryChart, MonthlyReport};

const MENU: &str = "\
==================== Tally ====================
 1) Add income
 2) Add expense
 3) List entries
 4) Summary
 5) Entries by category
 6) Expense chart
 7) Income chart
 8) Monthly report
 9) Sorted view
10) Categories
11) Export monthly CSV
 0) Exit";

const MENU_MAX: u32 = 11;
const SUMMARY_TOP_CATEGORIES: usize = 3;

const SORT_MENU: &str = "\
Sort by:
 1) Date (oldest first)
 2) Date (newest first)
 3) Amount (smallest first)
 4) Amount (largest first)
 5) Category
 0) Back";

enum Flow {
    Continue,
    Exit,
}

/// Interactive session over any line-based input and output
pub struct Shell<R, W> {
    ledger: Ledger,
    settings: Settings,
    prompter: Prompter<R, W>,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell with an empty ledger; blank dates default to the local date
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        Self::with_today(settings, input, output, Local::now().date_naive())
    }

    /// Create a shell with a fixed "today"
    pub fn with_today(settings: Settings, input: R, output: W, today: NaiveDate) -> Self {
        Self {
            ledger: Ledger::new(),
            settings,
            prompter: Prompter::new(input, output),
            today,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> TallyResult<()> {
        info!("shell started");

        loop {
            self.prompter.say("")?;
            self.prompter.say(MENU)?;
            let Some(choice) = self.prompter.prompt_choice("Choose an option: ", MENU_MAX)? else {
                break;
            };

            if let Flow::Exit = self.dispatch(choice)? {
                break;
            }
        }

        self.prompter.say("Goodbye!")?;
        info!(entries = self.ledger.len(), "shell exited");
        Ok(())
    }

    fn dispatch(&mut self, choice: u32) -> TallyResult<Flow> {
        match choice {
            1 => self.add_entry(EntryKind::Income),
            2 => self.add_entry(EntryKind::Expense),
            3 => self.list_entries(),
            4 => self.summary(),
            5 => self.entries_by_category(),
            6 => self.chart(EntryKind::Expense),
            7 => self.chart(EntryKind::Income),
            8 => self.monthly_report(),
            9 => self.sorted_view(),
            10 => self.categories(),
            11 => self.export_monthly_csv(),
            _ => Ok(Flow::Exit),
        }
    }

    fn add_entry(&mut self, kind: EntryKind) -> TallyResult<Flow> {
        let Some(description) = self
            .prompter
            .prompt_required("Description: ", "description")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.prompter.prompt_amount("Amount: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.prompter.prompt_required("Category: ", "category")? else {
            return Ok(Flow::Exit);
        };
        let date_prompt = format!("Date ({}, blank for today): ", self.settings.date_format);
        let Some(date) =
            self.prompter
                .prompt_date(&date_prompt, &self.settings.date_format, self.today)?
        else {
            return Ok(Flow::Exit);
        };

        match Entry::new(description, amount, kind, category, date) {
            Ok(entry) => {
                let line = entry.format_with_symbol(&self.settings.currency_symbol);
                self.ledger.add(entry);
                self.prompter.say(&format!("Added: {}", line))?;
            }
            Err(e) => {
                warn!(field = e.field(), error = %e, "entry rejected");
                self.prompter.say(&format!("Error: {}", e))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list_entries(&mut self) -> TallyResult<Flow> {
        let table = format_entry_table(self.ledger.entries(), &self.settings.currency_symbol);
        self.prompter.say(&table)?;
        Ok(Flow::Continue)
    }

    fn summary(&mut self) -> TallyResult<Flow> {
        let symbol = self.settings.currency_symbol.clone();
        let (top_name, top_total) = self.ledger.highest_spending_category();

        self.prompter.say(&format!(
            "Total income:     {}",
            self.ledger.total_income().format_with_symbol(&symbol)
        ))?;
        self.prompter.say(&format!(
            "Total expenses:   {}",
            self.ledger.total_expenses().format_with_symbol(&symbol)
        ))?;
        self.prompter.say(&format!(
            "Net savings:      {}",
            self.ledger.net_savings().format_with_symbol(&symbol)
        ))?;
        self.prompter.say(&format!(
            "Highest spending: {} ({})",
            top_name,
            top_total.format_with_symbol(&symbol)
        ))?;

        let chart = CategoryChart::generate(&self.ledger, EntryKind::Expense);
        let top = chart.top_categories(SUMMARY_TOP_CATEGORIES);
        if !top.is_empty() {
            self.prompter.say("Top expense categories:")?;
            for (rank, row) in top.iter().enumerate() {
                self.prompter.say(&format!(
                    "  {}. {} {} ({})",
                    rank + 1,
                    row.category,
                    row.total.format_with_symbol(&symbol),
                    format_percentage(row.percentage)
                ))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn entries_by_category(&mut self) -> TallyResult<Flow> {
        let Some(category) = self.prompter.prompt_string("Category: ")? else {
            return Ok(Flow::Exit);
        };

        let text = self
            .category_listing(&category)
            .unwrap_or_else(|e| format!("Error: {}", e));
        self.prompter.say(&text)?;
        Ok(Flow::Continue)
    }

    fn category_listing(&self, category: &str) -> TallyResult<String> {
        let symbol = &self.settings.currency_symbol;
        let entries = self.ledger.entries_by_category(category)?;
        let income = self.ledger.total_by_category(category, EntryKind::Income)?;
        let expenses = self.ledger.total_by_category(category, EntryKind::Expense)?;

        let mut text = format_entry_lines(entries, symbol);
        text.push_str(&format!(
            "\nIncome: {}  Expenses: {}",
            income.format_with_symbol(symbol),
            expenses.format_with_symbol(symbol)
        ));
        Ok(text)
    }

    fn chart(&mut self, kind: EntryKind) -> TallyResult<Flow> {
        let chart = CategoryChart::with_width(&self.ledger, kind, self.settings.chart_width);
        self.prompter
            .say(&chart.format_terminal(&self.settings.currency_symbol))?;
        Ok(Flow::Continue)
    }

    fn monthly_report(&mut self) -> TallyResult<Flow> {
        let report = MonthlyReport::generate(&self.ledger);
        self.prompter
            .say(&report.format_terminal(&self.settings.currency_symbol))?;
        Ok(Flow::Continue)
    }

    fn sorted_view(&mut self) -> TallyResult<Flow> {
        self.prompter.say(SORT_MENU)?;
        let Some(choice) = self.prompter.prompt_choice("Choose an option: ", 5)? else {
            return Ok(Flow::Exit);
        };

        let sorted = match choice {
            1 => self.ledger.sorted_by_date(true),
            2 => self.ledger.sorted_by_date(false),
            3 => self.ledger.sorted_by_amount(true),
            4 => self.ledger.sorted_by_amount(false),
            5 => self.ledger.sorted_by_category(),
            _ => return Ok(Flow::Continue),
        };

        let table = format_entry_table(sorted, &self.settings.currency_symbol);
        self.prompter.say(&table)?;
        Ok(Flow::Continue)
    }

    /// Write the monthly report as CSV to a file, or to the screen if no
    /// path is given
    fn export_monthly_csv(&mut self) -> TallyResult<Flow> {
        let Some(path) = self
            .prompter
            .prompt_string("CSV file (blank to print): ")?
        else {
            return Ok(Flow::Exit);
        };
        let report = MonthlyReport::generate(&self.ledger);

        if path.is_empty() {
            let mut buf = Vec::new();
            report.export_csv(&mut buf)?;
            self.prompter.say(String::from_utf8_lossy(&buf).trim_end())?;
            return Ok(Flow::Continue);
        }

        let written = File::create(&path)
            .map_err(|e| TallyError::Io(format!("Cannot create {}: {}", path, e)))
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                report.export_csv(&mut writer)?;
                writer.flush()?;
                Ok(())
            });
        match written {
            Ok(()) => {
                info!(path = %path, months = report.rows.len(), "monthly report exported");
                self.prompter
                    .say(&format!("Monthly report written to {}", path))?;
            }
            Err(e) => self.prompter.say(&format!("Error: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn categories(&mut self) -> TallyResult<Flow> {
        let categories = self.ledger.all_categories();
        let text = if categories.is_empty() {
            "No categories yet.".to_string()
        } else {
            categories.join("\n")
        };
        self.prompter.say(&text)?;
        Ok(Flow::Continue)
    }
}
