use chrono::{DateTime, Utc};

use crate::domain::cart::model::Cart;

/// Snapshot of the order at the moment checkout was confirmed, taken
/// before the cart is cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub total: f64,
    pub item_count: u64,
    pub placed_at: DateTime<Utc>,
}

/// Simulated order placement: surface the pre-clear total, then empty the
/// cart. No persistence and no partial-failure semantics.
pub trait CheckoutUseCase: Send + Sync {
    fn execute(&self, cart: &mut Cart) -> CheckoutSummary;
}
