use chrono::Month;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

use super::enrich::EnrichedCategory;
use super::projection::{accumulate, ForecastMonth};
use super::status::sum_amounts;
use crate::models::CategoryId;

/// What-if view: selected categories continue at their average monthly rate
/// from January through `current_month`.
///
/// Months up to and including `current_month` are copied as-is. Every later
/// month gets the average for each selected visible category, keeps the
/// projected value for everything else, and is flagged `projected_average`.
/// When no visible category is selected the forecast is returned unchanged
/// and no month is flagged.
pub fn apply_average_overlay(
    forecast: &[ForecastMonth],
    categories: &[EnrichedCategory],
    selected: &HashSet<CategoryId>,
    current_month: Month,
    total_budget: Decimal,
) -> Vec<ForecastMonth> {
    if selected.is_empty() {
        return forecast.to_vec();
    }

    let split = (current_month.number_from_month() as usize).min(forecast.len());
    let (past, future) = forecast.split_at(split);

    let averages: BTreeMap<&str, Decimal> = categories
        .iter()
        .filter(|c| c.category.visible && selected.contains(c.id()))
        .map(|c| (c.id(), average(past, c.id())))
        .collect();
    if averages.is_empty() {
        return forecast.to_vec();
    }

    let mut rewritten: Vec<ForecastMonth> = future
        .iter()
        .map(|month| {
            let mut month = month.clone();
            for (id, avg) in &averages {
                month.amounts.insert((*id).to_string(), *avg);
            }
            month.refresh_total();
            month.projected_average = true;
            month
        })
        .collect();

    let carried = past.last().map(|m| m.cumulative).unwrap_or(Decimal::ZERO);
    accumulate(&mut rewritten, total_budget, carried);

    let mut result = past.to_vec();
    result.extend(rewritten);
    result
}

fn average(past: &[ForecastMonth], category_id: &str) -> Decimal {
    let sum = sum_amounts(past.iter().map(|m| m.amount_for(category_id)));
    let count = past.len().max(1);
    sum / Decimal::from(count)
}
