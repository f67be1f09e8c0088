use rust_decimal::Decimal;

pub type CategoryId = String;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub budget_id: String,
    pub name: String,
    /// Opaque display token, never interpreted here.
    pub color: String,
    pub budget: Decimal,
    pub visible: bool,
}

/// (name, percent of the budget total, color)
const DEFAULT_TEMPLATE: &[(&str, u32, &str)] = &[
    ("Housing", 30, "#4f46e5"),
    ("Food", 15, "#16a34a"),
    ("Transportation", 10, "#f59e0b"),
    ("Utilities", 10, "#0ea5e9"),
    ("Insurance", 10, "#8b5cf6"),
    ("Savings", 10, "#14b8a6"),
    ("Entertainment", 5, "#ec4899"),
    ("Personal Care", 5, "#f97316"),
    ("Miscellaneous", 5, "#64748b"),
];

impl Category {
    pub fn new(
        id: impl Into<String>,
        budget_id: impl Into<String>,
        name: impl Into<String>,
        budget: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            budget_id: budget_id.into(),
            name: name.into(),
            color: String::new(),
            budget,
            visible: true,
        }
    }

    /// The fixed set of categories a freshly created budget starts with,
    /// each allocated its template share of `total`.
    pub fn default_template(budget_id: &str, total: Decimal) -> Vec<Category> {
        DEFAULT_TEMPLATE
            .iter()
            .enumerate()
            .map(|(i, (name, percent, color))| {
                let budget = total * Decimal::from(*percent) / Decimal::ONE_HUNDRED;
                let id = format!("{budget_id}-default-{}", i + 1);
                let mut cat = Category::new(id, budget_id, *name, budget);
                cat.color = (*color).to_string();
                cat
            })
            .collect()
    }

    /// Find a category by name (case-insensitive) in a slice.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        let lower = name.to_lowercase();
        categories.iter().find(|c| c.name.to_lowercase() == lower)
    }

    /// Find a category by ID in a slice.
    pub fn find_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.id == id)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
