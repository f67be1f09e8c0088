use anyhow::{Context, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::path::Path;

use crate::forecast::{EnrichedCategory, ForecastMonth, Totals};
use crate::models::Category;

/// Write the twelve-month forecast as a spreadsheet, one row per month and
/// one column per category. With `by_name`, categories sharing a display name
/// share one column, matching older name-keyed exports. Returns the number of
/// month rows written.
pub(crate) fn export_forecast(
    path: &Path,
    forecast: &[ForecastMonth],
    categories: &[Category],
    by_name: bool,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let mut columns: Vec<&str> = Vec::new();
    for cat in categories {
        if !by_name || !columns.contains(&cat.name.as_str()) {
            columns.push(&cat.name);
        }
    }

    let mut header = vec!["Month".to_string()];
    header.extend(columns.iter().map(|c| c.to_string()));
    header.extend(["Total", "Cumulative", "Remaining", "Projected"].map(String::from));
    wtr.write_record(&header)?;

    for month in forecast {
        let mut row = vec![month.name.to_string()];
        if by_name {
            let amounts = month.amounts_by_name(categories);
            row.extend(
                columns
                    .iter()
                    .map(|name| cell(amounts.get(*name).copied().unwrap_or(Decimal::ZERO))),
            );
        } else {
            row.extend(categories.iter().map(|c| cell(month.amount_for(&c.id))));
        }
        row.push(cell(month.total));
        row.push(cell(month.cumulative));
        row.push(cell(month.remaining));
        row.push(if month.projected_average { "yes" } else { "no" }.to_string());
        wtr.write_record(&row)?;
    }

    wtr.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(forecast.len())
}

/// Write per-category spent/remaining plus a closing TOTAL row. Returns the
/// number of category rows written.
pub(crate) fn export_summary(
    path: &Path,
    categories: &[EnrichedCategory],
    totals: &Totals,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    wtr.write_record(["Category", "Budget", "Spent", "Remaining", "Status"])?;
    for cat in categories {
        let status = crate::forecast::classify(cat.spent, cat.budget());
        wtr.write_record([
            cat.name().to_string(),
            cell(cat.budget()),
            cell(cat.spent),
            cell(cat.remaining),
            status.to_string(),
        ])?;
    }
    wtr.write_record([
        "TOTAL".to_string(),
        cell(totals.total_budget),
        cell(totals.spent),
        cell(totals.remaining),
        totals.status().to_string(),
    ])?;

    wtr.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(categories.len())
}

fn cell(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
