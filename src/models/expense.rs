use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    OneTime,
    Monthly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Monthly => "monthly",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "one-time" => Ok(Self::OneTime),
            "monthly" => Ok(Self::Monthly),
            other => anyhow::bail!(
                "Invalid recurrence '{other}': expected 'one-time' or 'monthly'"
            ),
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: String,
    pub category_id: String,
    pub budget_id: String,
    pub description: String,
    /// Actual amount. Only meaningful when `is_actual` is set.
    pub amount: Decimal,
    /// Planned amount, used for forecasting when the expense is not actual.
    pub budgeted_amount: Option<Decimal>,
    /// ISO-8601 date the expense is anchored to, as supplied by the store.
    pub date: String,
    pub recurring: Recurrence,
    pub is_actual: bool,
}

impl Expense {
    /// Anchor date, or `None` when the stored string is not a valid date.
    /// A trailing time component (`2024-01-15T00:00:00Z`) is ignored.
    pub fn date(&self) -> Option<NaiveDate> {
        let day = self.date.trim().split(['T', ' ']).next()?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// The amount that goes into the forecast: the actual amount once the
    /// expense is marked actual, otherwise the planned one.
    pub fn amount_to_use(&self) -> Decimal {
        if self.is_actual {
            self.amount
        } else {
            self.budgeted_amount.unwrap_or(self.amount)
        }
    }
}
