//! Pure budget arithmetic: per-category spending, whole-budget totals, the
//! twelve-month forecast and the average what-if overlay.
//!
//! Nothing in here reads the clock or does I/O. The reference date and year
//! are always passed in, so the same inputs give the same outputs.

mod breakdown;
mod enrich;
mod overlay;
mod projection;
mod status;
mod totals;

pub use breakdown::{breakdown, CategoryShare};
pub use enrich::{enrich, visible, EnrichedCategory};
pub use overlay::apply_average_overlay;
pub use projection::{project, visible_categories, ForecastMonth, MONTHS_IN_YEAR};
pub use status::{classify, format_percent, BudgetStatus};
pub use totals::{aggregate, Totals};
