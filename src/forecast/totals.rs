use rust_decimal::Decimal;

use super::enrich::EnrichedCategory;
use super::status::{classify, format_percent, percent_of, sum_amounts, BudgetStatus};

/// Whole-budget figures for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub total_budget: Decimal,
    pub spent: Decimal,
    pub allocated: Decimal,
    /// `total_budget - allocated`; negative means categories are over-allocated.
    pub unallocated: Decimal,
    /// Measured against the budget total, not against `allocated`.
    pub remaining: Decimal,
    pub percent_used: String,
}

impl Totals {
    pub fn is_over_allocated(&self) -> bool {
        self.unallocated < Decimal::ZERO
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < Decimal::ZERO
    }

    pub fn status(&self) -> BudgetStatus {
        classify(self.spent, self.total_budget)
    }
}

/// Callers pass visible categories only.
pub fn aggregate(total_budget: Decimal, categories: &[EnrichedCategory]) -> Totals {
    let spent = sum_amounts(categories.iter().map(|c| c.spent));
    let allocated = sum_amounts(categories.iter().map(|c| c.budget()));

    Totals {
        total_budget,
        spent,
        allocated,
        unallocated: total_budget.saturating_sub(allocated),
        remaining: total_budget.saturating_sub(spent),
        percent_used: format_percent(percent_of(spent, total_budget)),
    }
}
