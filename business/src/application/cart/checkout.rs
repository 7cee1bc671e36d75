use std::sync::Arc;

use chrono::Utc;

use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::checkout::{CheckoutSummary, CheckoutUseCase};
use crate::domain::logger::Logger;

pub struct CheckoutUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl CheckoutUseCase for CheckoutUseCaseImpl {
    fn execute(&self, cart: &mut Cart) -> CheckoutSummary {
        let summary = CheckoutSummary {
            total: cart.total(),
            item_count: cart.item_count(),
            placed_at: Utc::now(),
        };

        cart.clear();

        self.logger.info(&format!(
            "Order placed: {} items, total {:.2}",
            summary.item_count, summary.total
        ));

        summary
    }
}
