use anyhow::{Context, Result};
use chrono::{Datelike, Month};
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{expand_home, flag_value, has_flag, Settings};
use crate::forecast::{
    aggregate, apply_average_overlay, breakdown, enrich, project, visible, visible_categories,
    ForecastMonth,
};
use crate::import::Records;
use crate::models::{Budget, Category, Expense};
use crate::report;

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &[
    "--data-dir",
    "--date",
    "--budget",
    "--currency",
    "--average",
    "--total",
];

pub(crate) fn as_cli(args: &[String], settings: &Settings) -> Result<()> {
    let positional = positionals(args);
    let command = if has_flag(args, "--help") || has_flag(args, "-h") {
        "help"
    } else if has_flag(args, "--version") || has_flag(args, "-V") {
        "version"
    } else {
        positional.first().copied().unwrap_or("summary")
    };
    debug!("Running '{command}' against {}", settings.data_dir.display());

    match command {
        "summary" | "s" => cli_summary(settings),
        "breakdown" | "b" => cli_breakdown(settings),
        "forecast" | "f" => cli_forecast(args, settings),
        "export" => cli_export(args, positional.get(1).copied(), settings),
        "budgets" => cli_budgets(settings),
        "template" => cli_template(args, settings),
        "help" => {
            print_usage();
            Ok(())
        }
        "version" => {
            println!("budgetcast {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

/// Arguments after the program name that are neither flags nor flag values.
fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            rest.next();
        } else if !arg.starts_with('-') {
            out.push(arg.as_str());
        }
    }
    out
}

fn print_usage() {
    println!("BudgetCast — budget totals and twelve-month spending forecasts");
    println!();
    println!("Usage: budgetcast [command] [options]");
    println!();
    println!("Commands:");
    println!("  summary                       Totals, percent used and per-category spending (default)");
    println!("  breakdown                     Each category's share of spending");
    println!("  forecast                      Month-by-month forecast for the current year");
    println!("    --average <cat,...>         Continue these categories at their monthly average");
    println!("  export [path]                 Export the forecast to CSV");
    println!("    --summary                   Export the category summary instead");
    println!("    --by-name                   One column per category name (merges shared names)");
    println!("  budgets                       List budgets");
    println!("  template --total <amount>     Show the default categories for a new budget");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --budget <id>                 Budget to report on (default: first in budgets.csv)");
    println!("  --date <YYYY-MM-DD>           Reference date (default: today)");
    println!("  --currency <code>             USD, EUR, GBP, JPY or CAD (env BUDGETCAST_CURRENCY)");
    println!("  --data-dir <dir>              Directory with budgets.csv, categories.csv, expenses.csv");
    println!("                                (env BUDGETCAST_DATA_DIR)");
}

/// One budget's records, ready for the engine.
struct BudgetView {
    budget: Budget,
    categories: Vec<Category>,
    expenses: Vec<Expense>,
}

impl BudgetView {
    fn load(settings: &Settings) -> Result<Self> {
        let records = Records::load(&settings.data_dir)?;
        let budget = records.budget(settings.budget_id.as_deref())?.clone();
        let (categories, expenses) = records.for_budget(&budget.id);
        Ok(Self {
            budget,
            categories,
            expenses,
        })
    }
}

fn cli_summary(settings: &Settings) -> Result<()> {
    let view = BudgetView::load(settings)?;
    let enriched = enrich(&view.categories, &view.expenses, settings.reference_date);
    let shown = visible(&enriched);
    let totals = aggregate(view.budget.total_amount, &shown);
    print!(
        "{}",
        report::render_summary(
            &view.budget,
            &totals,
            &shown,
            &settings.currency,
            settings.reference_date
        )
    );
    Ok(())
}

fn cli_breakdown(settings: &Settings) -> Result<()> {
    let view = BudgetView::load(settings)?;
    let enriched = enrich(&view.categories, &view.expenses, settings.reference_date);
    let shares = breakdown(&visible(&enriched));
    println!("{} — category breakdown", view.budget.name);
    print!("{}", report::render_breakdown(&shares, &settings.currency));
    Ok(())
}

fn cli_forecast(args: &[String], settings: &Settings) -> Result<()> {
    let view = BudgetView::load(settings)?;
    let categories = visible_categories(&view.categories);
    let forecast = build_forecast(args, settings, &view, &categories)?;
    println!(
        "{} — {} forecast",
        view.budget.name,
        settings.reference_date.year()
    );
    print!(
        "{}",
        report::render_forecast(&forecast, &categories, &settings.currency)
    );
    Ok(())
}

fn cli_export(args: &[String], path: Option<&str>, settings: &Settings) -> Result<()> {
    let view = BudgetView::load(settings)?;
    let year = settings.reference_date.year();

    let path = path
        .map(|p| PathBuf::from(expand_home(p)))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            let kind = if has_flag(args, "--summary") {
                "summary"
            } else {
                "forecast"
            };
            PathBuf::from(format!("{home}/budgetcast-{kind}-{year}.csv"))
        });

    if has_flag(args, "--summary") {
        let enriched = enrich(&view.categories, &view.expenses, settings.reference_date);
        let shown = visible(&enriched);
        let totals = aggregate(view.budget.total_amount, &shown);
        let count = crate::export::export_summary(&path, &shown, &totals)?;
        println!("Exported {count} categories to {}", path.display());
    } else {
        let categories = visible_categories(&view.categories);
        let forecast = build_forecast(args, settings, &view, &categories)?;
        let by_name = has_flag(args, "--by-name");
        let count = crate::export::export_forecast(&path, &forecast, &categories, by_name)?;
        println!("Exported {count} months to {}", path.display());
    }
    Ok(())
}

fn cli_budgets(settings: &Settings) -> Result<()> {
    let records = Records::load(&settings.data_dir)?;
    if records.budgets.is_empty() {
        println!("No budgets");
        return Ok(());
    }

    println!(
        "{:<12} {:<24} {:>14}  {:<12} Updated",
        "ID", "Name", "Total", "Owner"
    );
    println!("{}", "─".repeat(76));
    for budget in &records.budgets {
        let updated = if budget.updated_at.is_empty() {
            &budget.created_at
        } else {
            &budget.updated_at
        };
        println!(
            "{:<12} {:<24} {:>14}  {:<12} {}",
            report::util::truncate(&budget.id, 12),
            report::util::truncate(&budget.name, 24),
            crate::currency::format_currency(budget.total_amount, &settings.currency),
            report::util::truncate(&budget.user_id, 12),
            updated.split('T').next().unwrap_or_default(),
        );
    }
    Ok(())
}

fn cli_template(args: &[String], settings: &Settings) -> Result<()> {
    let raw = flag_value(args, "--total")
        .ok_or_else(|| anyhow::anyhow!("Usage: budgetcast template --total <amount>"))?;
    let total = Decimal::from_str(raw.replace(['$', ','], "").trim())
        .with_context(|| format!("Invalid --total '{raw}'"))?;
    if total < Decimal::ZERO {
        anyhow::bail!("--total must not be negative");
    }

    let budget_id = settings.budget_id.as_deref().unwrap_or("new");
    let categories = Category::default_template(budget_id, total);
    print!("{}", report::render_template(&categories, &settings.currency));
    Ok(())
}

/// Project the visible categories over the reference year, then apply the
/// average overlay when `--average` names any categories.
fn build_forecast(
    args: &[String],
    settings: &Settings,
    view: &BudgetView,
    categories: &[Category],
) -> Result<Vec<ForecastMonth>> {
    let total = view.budget.total_amount;
    let year = settings.reference_date.year();
    let forecast = project(categories, &view.expenses, total, year);

    let Some(list) = flag_value(args, "--average") else {
        return Ok(forecast);
    };
    let selected = resolve_selection(&list, categories)?;
    let enriched = enrich(categories, &view.expenses, settings.reference_date);
    let current_month = month_of(settings.reference_date.month())?;
    Ok(apply_average_overlay(
        &forecast,
        &enriched,
        &selected,
        current_month,
        total,
    ))
}

/// Comma-separated category ids or names into a set of ids.
pub(crate) fn resolve_selection(list: &str, categories: &[Category]) -> Result<HashSet<String>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|key| {
            Category::find_by_id(categories, key)
                .or_else(|| Category::find_by_name(categories, key))
                .map(|c| c.id.clone())
                .ok_or_else(|| anyhow::anyhow!("Unknown category '{key}'"))
        })
        .collect()
}

fn month_of(month: u32) -> Result<Month> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid month {month}"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
