use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::cart::CheckoutSnapshot;
use crate::models::dish::Dish;

/// Proof of a confirmed (simulated) payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub items: Vec<Dish>,
    pub total: u32,
    pub paid_at: DateTime<Utc>,
}

/// Simulated payment processing. Confirmation always succeeds; there is no
/// decline path. Cancellation never reaches this service, so confirming is
/// the only operation.
#[derive(Debug, Default)]
pub struct PaymentService;

impl PaymentService {
    pub fn new() -> Self {
        Self
    }

    /// Settle the snapshot and issue a receipt. An empty snapshot is
    /// allowed and settles for R0.
    pub fn confirm(&self, checkout: CheckoutSnapshot) -> Receipt {
        info!(
            "payment confirmed: {} item(s), R{}",
            checkout.items.len(),
            checkout.total
        );
        Receipt {
            total: checkout.total,
            items: checkout.items,
            paid_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Catalog;

    #[test]
    fn test_receipt_carries_the_snapshot_total() {
        let catalog = Catalog::sample();
        let items = vec![
            catalog.find("1").unwrap().clone(),
            catalog.find("3").unwrap().clone(),
        ];
        let receipt = PaymentService::new().confirm(CheckoutSnapshot::of(items));
        assert_eq!(receipt.total, 900);
        assert_eq!(receipt.items.len(), 2);
    }

    #[test]
    fn test_empty_checkout_settles_for_zero() {
        let receipt = PaymentService::new().confirm(CheckoutSnapshot::empty());
        assert_eq!(receipt.total, 0);
        assert!(receipt.items.is_empty());
    }
}
