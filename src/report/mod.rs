//! Plain-text views printed by the CLI.

pub(crate) mod util;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::currency::{format_currency, CurrencyConfig};
use crate::forecast::{
    classify, format_percent, CategoryShare, EnrichedCategory, ForecastMonth, Totals,
};
use crate::models::{Budget, Category};
use util::{left, right};

const NAME_WIDTH: usize = 22;
const AMOUNT_WIDTH: usize = 14;

pub(crate) fn render_summary(
    budget: &Budget,
    totals: &Totals,
    categories: &[EnrichedCategory],
    currency: &CurrencyConfig,
    reference_date: NaiveDate,
) -> String {
    let money = |amount: Decimal| format_currency(amount, currency);
    let mut out = String::new();

    out.push_str(&format!("BudgetCast — {} (as of {reference_date})\n", budget.name));
    out.push_str(&format!("{}\n", "─".repeat(48)));
    out.push_str(&format!("  Budget:       {}\n", money(totals.total_budget)));
    out.push_str(&format!("  Allocated:    {}\n", money(totals.allocated)));
    out.push_str(&format!("  Unallocated:  {}\n", money(totals.unallocated)));
    out.push_str(&format!("  Spent:        {}\n", money(totals.spent)));
    out.push_str(&format!("  Remaining:    {}\n", money(totals.remaining)));
    out.push_str(&format!(
        "  Used:         {}% ({})\n",
        totals.percent_used,
        totals.status()
    ));

    if totals.is_over_allocated() {
        out.push_str(&format!(
            "\nWarning: categories are allocated {} more than the budget\n",
            money(-totals.unallocated)
        ));
    }
    if totals.is_over_budget() {
        out.push_str(&format!(
            "Warning: spending is {} over budget\n",
            money(-totals.remaining)
        ));
    }

    if !categories.is_empty() {
        out.push_str("\nCategories:\n");
        for cat in categories {
            out.push_str(&format!(
                "  {} {} {} {}  {}\n",
                left(cat.name(), NAME_WIDTH),
                right(&money(cat.spent), AMOUNT_WIDTH),
                right(&money(cat.budget()), AMOUNT_WIDTH),
                right(&money(cat.remaining), AMOUNT_WIDTH),
                classify(cat.spent, cat.budget()),
            ));
        }
    }
    out
}

pub(crate) fn render_breakdown(shares: &[CategoryShare], currency: &CurrencyConfig) -> String {
    if shares.is_empty() {
        return "No categories\n".to_string();
    }
    let mut out = format!(
        "  {} {} {} {}  Status\n",
        left("Category", NAME_WIDTH),
        right("Spent", AMOUNT_WIDTH),
        right("Share", 8),
        right("Of budget", 10),
    );
    for share in shares {
        out.push_str(&format!(
            "  {} {} {} {}  {}\n",
            left(&share.name, NAME_WIDTH),
            right(&format_currency(share.spent, currency), AMOUNT_WIDTH),
            right(&format!("{}%", format_percent(share.share_of_spent)), 8),
            right(&format!("{}%", format_percent(share.percent_of_budget)), 10),
            share.status,
        ));
    }
    out
}

/// Twelve-month table. Months rewritten by the average overlay carry a `*`.
pub(crate) fn render_forecast(
    forecast: &[ForecastMonth],
    categories: &[Category],
    currency: &CurrencyConfig,
) -> String {
    let money = |amount: Decimal| right(&format_currency(amount, currency), AMOUNT_WIDTH);

    let mut out = left("Month", 6);
    for cat in categories {
        out.push_str(&right(&cat.name, AMOUNT_WIDTH));
    }
    for heading in ["Total", "Cumulative", "Remaining"] {
        out.push_str(&right(heading, AMOUNT_WIDTH));
    }
    out.push('\n');

    for month in forecast {
        let marker = if month.projected_average { "*" } else { "" };
        out.push_str(&left(&format!("{}{marker}", month.name), 6));
        for cat in categories {
            out.push_str(&money(month.amount_for(&cat.id)));
        }
        out.push_str(&money(month.total));
        out.push_str(&money(month.cumulative));
        out.push_str(&money(month.remaining));
        out.push('\n');
    }

    if forecast.iter().any(|m| m.projected_average) {
        out.push_str("\n* projected from the monthly average of selected categories\n");
    }
    out
}

pub(crate) fn render_template(categories: &[Category], currency: &CurrencyConfig) -> String {
    let mut out = String::new();
    for cat in categories {
        out.push_str(&format!(
            "  {} {}  {}\n",
            left(&cat.name, NAME_WIDTH),
            right(&format_currency(cat.budget, currency), AMOUNT_WIDTH),
            cat.color,
        ));
    }
    out
}
