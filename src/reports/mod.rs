//! Reports module for Tally
//!
//! Category charts and month-by-month summaries built from a ledger.

pub mod category_chart;
pub mod monthly;

pub use category_chart::{CategoryChart, ChartRow, DEFAULT_BAR_WIDTH};
pub use monthly::{MonthRow, MonthlyReport};
