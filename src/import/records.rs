use anyhow::{Context, Result};
use csv::StringRecord;
use log::info;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Budget, Category, Expense, Recurrence};

pub(crate) const BUDGETS_FILE: &str = "budgets.csv";
pub(crate) const CATEGORIES_FILE: &str = "categories.csv";
pub(crate) const EXPENSES_FILE: &str = "expenses.csv";

/// Rows exported from the budget store, loaded as-is.
#[derive(Debug, Clone, Default)]
pub(crate) struct Records {
    pub(crate) budgets: Vec<Budget>,
    pub(crate) categories: Vec<Category>,
    pub(crate) expenses: Vec<Expense>,
}

impl Records {
    /// Read `budgets.csv`, `categories.csv` and `expenses.csv` from `dir`.
    pub(crate) fn load(dir: &Path) -> Result<Self> {
        let budgets = read_rows(&dir.join(BUDGETS_FILE), BUDGET_COLUMNS, parse_budget)?;
        let categories =
            read_rows(&dir.join(CATEGORIES_FILE), CATEGORY_COLUMNS, parse_category)?;
        let expenses = read_rows(&dir.join(EXPENSES_FILE), EXPENSE_COLUMNS, parse_expense)?;
        info!(
            "Loaded {} budgets, {} categories, {} expenses from {}",
            budgets.len(),
            categories.len(),
            expenses.len(),
            dir.display()
        );
        Ok(Self {
            budgets,
            categories,
            expenses,
        })
    }

    /// The budget with `id`, or the first one when no id is given.
    pub(crate) fn budget(&self, id: Option<&str>) -> Result<&Budget> {
        match id {
            Some(id) => self
                .budgets
                .iter()
                .find(|b| b.id == id)
                .ok_or_else(|| anyhow::anyhow!("Budget '{id}' not found")),
            None => self
                .budgets
                .first()
                .ok_or_else(|| anyhow::anyhow!("No budgets found in {BUDGETS_FILE}")),
        }
    }

    /// Categories and expenses belonging to one budget.
    pub(crate) fn for_budget(&self, budget_id: &str) -> (Vec<Category>, Vec<Expense>) {
        let categories = self
            .categories
            .iter()
            .filter(|c| c.budget_id == budget_id)
            .cloned()
            .collect();
        let expenses = self
            .expenses
            .iter()
            .filter(|e| e.budget_id == budget_id)
            .cloned()
            .collect();
        (categories, expenses)
    }
}

const BUDGET_COLUMNS: &[&str] = &[
    "id",
    "name",
    "total_amount",
    "user_id",
    "created_at",
    "updated_at",
];
const CATEGORY_COLUMNS: &[&str] = &["id", "budget_id", "name", "color", "budget", "visible"];
const EXPENSE_COLUMNS: &[&str] = &[
    "id",
    "category_id",
    "budget_id",
    "description",
    "amount",
    "budgeted_amount",
    "date",
    "recurring",
    "is_actual",
];

/// Header positions for one file, looked up by name so column order is free.
struct Columns {
    positions: Vec<(&'static str, usize)>,
}

impl Columns {
    fn new(headers: &StringRecord, required: &[&'static str]) -> Result<Self> {
        let mut positions = Vec::with_capacity(required.len());
        for name in required {
            let pos = headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| anyhow::anyhow!("Missing column '{name}'"))?;
            positions.push((*name, pos));
        }
        Ok(Self { positions })
    }

    fn get<'r>(&self, record: &'r StringRecord, name: &str) -> &'r str {
        self.positions
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, pos)| record.get(*pos))
            .map(str::trim)
            .unwrap_or("")
    }
}

fn read_rows<T>(
    path: &Path,
    required: &[&'static str],
    parse: fn(&Columns, &StringRecord) -> Result<T>,
) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers = rdr
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .clone();
    let columns =
        Columns::new(&headers, required).with_context(|| format!("Invalid {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // Line 1 is the header.
        let line = i + 2;
        let record = result
            .with_context(|| format!("{}: failed to read line {line}", path.display()))?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let row = parse(&columns, &record)
            .with_context(|| format!("{}: line {line}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_budget(cols: &Columns, record: &StringRecord) -> Result<Budget> {
    Ok(Budget {
        id: required(cols, record, "id")?,
        name: cols.get(record, "name").to_string(),
        total_amount: parse_decimal(cols.get(record, "total_amount"))?,
        user_id: cols.get(record, "user_id").to_string(),
        created_at: cols.get(record, "created_at").to_string(),
        updated_at: cols.get(record, "updated_at").to_string(),
    })
}

fn parse_category(cols: &Columns, record: &StringRecord) -> Result<Category> {
    Ok(Category {
        id: required(cols, record, "id")?,
        budget_id: required(cols, record, "budget_id")?,
        name: required(cols, record, "name")?,
        color: cols.get(record, "color").to_string(),
        budget: parse_decimal(cols.get(record, "budget"))?,
        visible: parse_bool(cols.get(record, "visible"), true)?,
    })
}

fn parse_expense(cols: &Columns, record: &StringRecord) -> Result<Expense> {
    let budgeted = cols.get(record, "budgeted_amount");
    Ok(Expense {
        id: required(cols, record, "id")?,
        category_id: required(cols, record, "category_id")?,
        budget_id: required(cols, record, "budget_id")?,
        description: cols.get(record, "description").to_string(),
        amount: parse_decimal(cols.get(record, "amount"))?,
        budgeted_amount: if budgeted.is_empty() {
            None
        } else {
            Some(parse_decimal(budgeted)?)
        },
        date: cols.get(record, "date").to_string(),
        recurring: Recurrence::parse(cols.get(record, "recurring"))?,
        is_actual: parse_bool(cols.get(record, "is_actual"), false)?,
    })
}

fn required(cols: &Columns, record: &StringRecord, name: &str) -> Result<String> {
    let value = cols.get(record, name);
    if value.is_empty() {
        anyhow::bail!("Empty '{name}'");
    }
    Ok(value.to_string())
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s.replace(['$', ','], "").trim().to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned).with_context(|| format!("Failed to parse '{s}' as decimal"))
}

fn parse_bool(s: &str, default: bool) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "" => Ok(default),
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => anyhow::bail!("Failed to parse '{other}' as boolean"),
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
