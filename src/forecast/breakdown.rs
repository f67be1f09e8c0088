use rust_decimal::Decimal;

use super::enrich::EnrichedCategory;
use super::status::{classify, percent_of, sum_amounts, BudgetStatus};

/// A category's slice of the overall spending.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category_id: String,
    pub name: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Percent of everything spent across the given categories.
    pub share_of_spent: Decimal,
    /// Percent of this category's own allocation.
    pub percent_of_budget: Decimal,
    pub status: BudgetStatus,
}

pub fn breakdown(categories: &[EnrichedCategory]) -> Vec<CategoryShare> {
    let total_spent = sum_amounts(categories.iter().map(|c| c.spent));

    categories
        .iter()
        .map(|c| CategoryShare {
            category_id: c.id().to_string(),
            name: c.name().to_string(),
            budget: c.budget(),
            spent: c.spent,
            remaining: c.remaining,
            share_of_spent: percent_of(c.spent, total_spent),
            percent_of_budget: percent_of(c.spent, c.budget()),
            status: classify(c.spent, c.budget()),
        })
        .collect()
}
