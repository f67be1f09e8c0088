use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: String,
    pub name: String,
    /// Ceiling for every "remaining" figure. May be lower than the sum of
    /// category allocations.
    pub total_amount: Decimal,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
