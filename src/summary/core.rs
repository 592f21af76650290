//! Aggregation of transactions into the dashboard figures.
//!
//! All aggregation happens over in-memory transaction slices; the amounts
//! are exact decimals, so summing is order-independent and lossless.
//! Rounding to cents happens only at the edges that present per-category
//! figures.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{transaction::Transaction, transaction_type::TransactionType};

/// The headline totals across all transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// The sum of all income amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    /// The sum of all expense amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    /// Income minus expenses. Negative when spending exceeds income.
    #[serde(with = "rust_decimal::serde::float")]
    pub current_balance: Decimal,
    /// The sum of all asset amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_assets: Decimal,
    /// The sum of all liability amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_liabilities: Decimal,
    /// Assets minus liabilities. Negative when debt exceeds holdings.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_worth: Decimal,
}

/// Sum the transaction amounts into the four totals and the two derived
/// figures.
///
/// An empty slice produces a summary of all zeros.
pub fn compute_summary(transactions: &[Transaction]) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => summary.total_income += transaction.amount,
            TransactionType::Expense => summary.total_expenses += transaction.amount,
            TransactionType::Asset => summary.total_assets += transaction.amount,
            TransactionType::Liability => summary.total_liabilities += transaction.amount,
        }
    }

    summary.current_balance = summary.total_income - summary.total_expenses;
    summary.net_worth = summary.total_assets - summary.total_liabilities;

    summary
}

/// The total spent in one expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    /// The display name of the category.
    pub name: String,
    /// The total spent, rounded half-up to cents.
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    /// The ID of the category.
    pub category_id: String,
}

/// Group expense transactions by category and total each group.
///
/// `category_names` maps category IDs to display names; an expense whose
/// category is missing from the map falls back to the raw ID. Groups appear
/// in the order their category is first seen in `transactions`, and each
/// total is rounded half-up to two decimal places.
pub fn expenses_by_category(
    transactions: &[Transaction],
    category_names: &HashMap<String, String>,
) -> Vec<CategoryExpense> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Decimal> = HashMap::new();

    for transaction in transactions {
        if transaction.transaction_type != TransactionType::Expense {
            continue;
        }

        totals
            .entry(transaction.category.clone())
            .and_modify(|total| *total += transaction.amount)
            .or_insert_with(|| {
                order.push(transaction.category.clone());
                transaction.amount
            });
    }

    order
        .into_iter()
        .map(|category_id| {
            let total = totals[&category_id];
            let name = category_names
                .get(&category_id)
                .cloned()
                .unwrap_or_else(|| category_id.clone());

            CategoryExpense {
                name,
                value: total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                category_id,
            }
        })
        .collect()
}

/// Income and expense totals for a single calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// A short label for the month, e.g. `Mar '24`.
    pub month: String,
    /// The income total for the month.
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    /// The expense total for the month.
    #[serde(with = "rust_decimal::serde::float")]
    pub expenses: Decimal,
}

/// Total income and expenses per calendar month for the `months_count`
/// months ending at `now`, oldest first.
///
/// Months with no transactions produce a zero point so the series has no
/// gaps. Asset and liability transactions are ignored.
pub fn monthly_trend(
    transactions: &[Transaction],
    months_count: u32,
    now: OffsetDateTime,
) -> Vec<MonthlyTrendPoint> {
    let mut months: Vec<(i32, time::Month)> = Vec::with_capacity(months_count as usize);
    let mut year = now.year();
    let mut month = now.month();
    for _ in 0..months_count {
        months.push((year, month));
        month = month.previous();
        if month == time::Month::December {
            year -= 1;
        }
    }
    months.reverse();

    months
        .into_iter()
        .map(|(year, month)| {
            let mut income = Decimal::ZERO;
            let mut expenses = Decimal::ZERO;

            for transaction in transactions {
                if transaction.date.year() != year || transaction.date.month() != month {
                    continue;
                }

                match transaction.transaction_type {
                    TransactionType::Income => income += transaction.amount,
                    TransactionType::Expense => expenses += transaction.amount,
                    _ => {}
                }
            }

            MonthlyTrendPoint {
                month: format_month_label(year, month),
                income,
                expenses,
            }
        })
        .collect()
}

fn format_month_label(year: i32, month: time::Month) -> String {
    let name = match month {
        time::Month::January => "Jan",
        time::Month::February => "Feb",
        time::Month::March => "Mar",
        time::Month::April => "Apr",
        time::Month::May => "May",
        time::Month::June => "Jun",
        time::Month::July => "Jul",
        time::Month::August => "Aug",
        time::Month::September => "Sep",
        time::Month::October => "Oct",
        time::Month::November => "Nov",
        time::Month::December => "Dec",
    };

    format!("{name} '{:02}", year.rem_euclid(100))
}
