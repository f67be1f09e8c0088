mod budget;
mod category;
mod expense;

pub use budget::Budget;
pub use category::{Category, CategoryId};
pub use expense::{Expense, Recurrence};
