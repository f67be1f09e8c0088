use chrono::{Datelike, NaiveDate};
use log::warn;
use rust_decimal::Decimal;

use super::status::sum_amounts;
use crate::models::{Category, Expense, Recurrence};

/// A category together with what has been spent against it so far.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCategory {
    pub category: Category,
    pub spent: Decimal,
    /// `budget - spent`. Negative when the category is overspent.
    pub remaining: Decimal,
}

impl EnrichedCategory {
    pub fn id(&self) -> &str {
        &self.category.id
    }

    pub fn name(&self) -> &str {
        &self.category.name
    }

    pub fn budget(&self) -> Decimal {
        self.category.budget
    }
}

pub fn enrich(
    categories: &[Category],
    expenses: &[Expense],
    reference_date: NaiveDate,
) -> Vec<EnrichedCategory> {
    categories
        .iter()
        .map(|cat| {
            let spent = sum_amounts(
                expenses
                    .iter()
                    .filter(|e| e.category_id == cat.id)
                    .filter_map(|e| effective_spent(e, reference_date)),
            );
            EnrichedCategory {
                category: cat.clone(),
                spent,
                remaining: cat.budget.saturating_sub(spent),
            }
        })
        .collect()
}

/// Only the visible entries; invisible categories never reach totals or charts.
pub fn visible(enriched: &[EnrichedCategory]) -> Vec<EnrichedCategory> {
    enriched
        .iter()
        .filter(|e| e.category.visible)
        .cloned()
        .collect()
}

/// How much of an expense counts as spent at `reference_date`. A monthly
/// expense is charged for its start month and every whole month since;
/// one dated after the reference month is counted once.
fn effective_spent(expense: &Expense, reference_date: NaiveDate) -> Option<Decimal> {
    let Some(date) = expense.date() else {
        warn!(
            "Skipping expense {} ({}) with unparseable date '{}'",
            expense.id, expense.description, expense.date
        );
        return None;
    };

    let amount = match expense.recurring {
        Recurrence::OneTime => expense.amount,
        Recurrence::Monthly => {
            let elapsed = month_diff(reference_date, date);
            if elapsed < 0 {
                expense.amount
            } else {
                let months = Decimal::from(elapsed + 1);
                expense.amount.checked_mul(months).unwrap_or_else(|| {
                    warn!(
                        "Expense {} overflows over {months} months; clamping",
                        expense.id
                    );
                    expense.amount.saturating_mul(months)
                })
            }
        }
    };
    Some(amount)
}

/// Whole calendar months from `from` to `to`; negative when `from` is later.
pub(crate) fn month_diff(to: NaiveDate, from: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}
