use crate::model::Order;
use serde::Serialize;
use std::fmt::Display;

/// Headline counters shown above the order list.
///
/// Always computed from the current list; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardSummary {
    pub total_orders: usize,
    /// Alias of `total_orders`; there is no courier entity behind it.
    pub total_couriers: usize,
    pub pending_payments: usize,
}

impl DashboardSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        let total_orders = orders.len();
        let pending_payments = orders
            .iter()
            .filter(|order| order.payment_status.is_pending())
            .count();
        Self {
            total_orders,
            total_couriers: total_orders,
            pending_payments,
        }
    }
}

impl Display for DashboardSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total Orders: {} | Total Couriers: {} | Pending Payments: {}",
            self.total_orders, self.total_couriers, self.pending_payments
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeliveryStatus, PaymentStatus};

    #[test]
    fn counts_pending_payments_only() {
        let orders = vec![
            Order::new(1u64, "Ada", "a", "b"),
            Order::new(2u64, "Bo", "a", "b")
                .with_status(DeliveryStatus::Delivered)
                .with_payment_status(PaymentStatus::Completed),
            Order::new(3u64, "Cy", "a", "b").with_payment_status(PaymentStatus::Other("refunded".into())),
        ];

        let summary = DashboardSummary::from_orders(&orders);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.total_couriers, 3);
        assert_eq!(summary.pending_payments, 1);
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(DashboardSummary::from_orders(&[]), DashboardSummary::default());
    }
}
