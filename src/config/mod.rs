use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::currency::CurrencyConfig;

pub(crate) const DATA_DIR_ENV: &str = "BUDGETCAST_DATA_DIR";
pub(crate) const CURRENCY_ENV: &str = "BUDGETCAST_CURRENCY";

/// Everything resolved once at startup. The reference date is read from the
/// clock here and nowhere else.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) data_dir: PathBuf,
    pub(crate) currency: CurrencyConfig,
    pub(crate) reference_date: NaiveDate,
    pub(crate) budget_id: Option<String>,
}

impl Settings {
    /// Flags win over environment variables, which win over defaults.
    pub(crate) fn resolve(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
        today: NaiveDate,
    ) -> Result<Self> {
        let data_dir = match flag_value(args, "--data-dir").or_else(|| env(DATA_DIR_ENV)) {
            Some(dir) => PathBuf::from(expand_home(&dir)),
            None => default_data_dir()?,
        };

        let currency = match flag_value(args, "--currency").or_else(|| env(CURRENCY_ENV)) {
            Some(code) => CurrencyConfig::from_code(&code)?,
            None => CurrencyConfig::default(),
        };

        let reference_date = match flag_value(args, "--date") {
            Some(date) => NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("Invalid --date '{date}' (expected YYYY-MM-DD)"))?,
            None => today,
        };

        Ok(Self {
            data_dir,
            currency,
            reference_date,
            budget_id: flag_value(args, "--budget"),
        })
    }
}

/// Value following `flag`, e.g. `--budget b1`.
pub(crate) fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

pub(crate) fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

pub(crate) fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "budgetcast", "BudgetCast")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
