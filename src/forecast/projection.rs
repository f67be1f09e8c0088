use chrono::Datelike;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::status::sum_amounts;
use crate::models::{Category, CategoryId, Expense, Recurrence};

pub const MONTHS_IN_YEAR: usize = 12;

pub const MONTH_NAMES: [&str; MONTHS_IN_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One calendar month of the current-year forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastMonth {
    pub name: &'static str,
    /// 0 = January.
    pub month_index: usize,
    pub amounts: BTreeMap<CategoryId, Decimal>,
    pub total: Decimal,
    /// Running total from January through this month.
    pub cumulative: Decimal,
    pub remaining: Decimal,
    /// Set on months rewritten by the average overlay.
    pub projected_average: bool,
}

impl ForecastMonth {
    fn empty(month_index: usize, categories: &[Category]) -> Self {
        Self {
            name: MONTH_NAMES[month_index],
            month_index,
            amounts: categories
                .iter()
                .map(|c| (c.id.clone(), Decimal::ZERO))
                .collect(),
            total: Decimal::ZERO,
            cumulative: Decimal::ZERO,
            remaining: Decimal::ZERO,
            projected_average: false,
        }
    }

    pub fn amount_for(&self, category_id: &str) -> Decimal {
        self.amounts
            .get(category_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Amounts keyed by display name. Categories sharing a name are summed
    /// into one entry, which is how name-keyed exports have always read.
    pub fn amounts_by_name(&self, categories: &[Category]) -> BTreeMap<String, Decimal> {
        let mut by_name = BTreeMap::new();
        for cat in categories {
            if let Some(amount) = self.amounts.get(&cat.id) {
                let entry = by_name.entry(cat.name.clone()).or_insert(Decimal::ZERO);
                *entry = entry.saturating_add(*amount);
            }
        }
        by_name
    }

    pub(crate) fn refresh_total(&mut self) {
        self.total = sum_amounts(self.amounts.values().copied());
    }

    fn add(&mut self, category_id: &str, amount: Decimal) {
        let entry = self
            .amounts
            .entry(category_id.to_string())
            .or_insert(Decimal::ZERO);
        *entry = entry.saturating_add(amount);
    }
}

/// Project every expense onto the twelve months of `current_year`.
///
/// One-time expenses land in their own month, and only when dated in
/// `current_year`. Monthly expenses repeat from their month-of-year through
/// December whatever year they started in.
pub fn project(
    categories: &[Category],
    expenses: &[Expense],
    total_budget: Decimal,
    current_year: i32,
) -> Vec<ForecastMonth> {
    let mut months: Vec<ForecastMonth> = (0..MONTHS_IN_YEAR)
        .map(|i| ForecastMonth::empty(i, categories))
        .collect();

    for expense in expenses {
        let Some(category) = Category::find_by_id(categories, &expense.category_id) else {
            debug!(
                "Expense {} references unknown category {}",
                expense.id, expense.category_id
            );
            continue;
        };
        let Some(date) = expense.date() else {
            warn!(
                "Skipping expense {} ({}) with unparseable date '{}'",
                expense.id, expense.description, expense.date
            );
            continue;
        };

        let amount = expense.amount_to_use();
        let start = date.month0() as usize;
        match expense.recurring {
            Recurrence::OneTime => {
                if date.year() == current_year {
                    months[start].add(&category.id, amount);
                }
            }
            Recurrence::Monthly => {
                for month in &mut months[start..] {
                    month.add(&category.id, amount);
                }
            }
        }
    }

    for month in &mut months {
        month.refresh_total();
    }
    accumulate(&mut months, total_budget, Decimal::ZERO);
    months
}

/// Recompute `cumulative` and `remaining` in calendar order, starting the
/// running total at `carried`.
pub(crate) fn accumulate(months: &mut [ForecastMonth], total_budget: Decimal, carried: Decimal) {
    let mut running = carried;
    for month in months {
        running = running.saturating_add(month.total);
        month.cumulative = running;
        month.remaining = total_budget.saturating_sub(running);
    }
}

/// Only the visible categories, for the forecast views.
pub fn visible_categories(categories: &[Category]) -> Vec<Category> {
    categories.iter().filter(|c| c.visible).cloned().collect()
}
