use rust_decimal::{Decimal, RoundingStrategy};

const DANGER_ABOVE: Decimal = Decimal::from_parts(90, 0, 0, false, 0);
const WARNING_ABOVE: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Good,
    Warning,
    Danger,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Health of a budget (or a single category) from how much of it is spent:
/// above 90% is danger, above 75% is warning, anything else is good.
pub fn classify(spent: Decimal, total: Decimal) -> BudgetStatus {
    let percent = percent_of(spent, total);
    if percent > DANGER_ABOVE {
        BudgetStatus::Danger
    } else if percent > WARNING_ABOVE {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Good
    }
}

/// `part / whole * 100`, or zero when `whole` is not positive.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Sum that clamps at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
pub(crate) fn sum_amounts(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// One-decimal display form of a percentage, e.g. `"10.8"`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}")
}
