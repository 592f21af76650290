//! Aggregation of transactions into dashboard figures: headline totals,
//! per-category expense groups and a month-by-month trend series.

pub mod core;
mod endpoint;

pub use core::{
    CategoryExpense, FinancialSummary, MonthlyTrendPoint, compute_summary, expenses_by_category,
    monthly_trend,
};
pub use endpoint::get_summary_endpoint;
