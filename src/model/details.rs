use crate::model::Order;
use std::fmt::Display;

/// Label/value listing of one order for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub fields: Vec<(&'static str, String)>,
}

impl OrderDetails {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value.as_str())
    }
}

impl From<&Order> for OrderDetails {
    fn from(order: &Order) -> Self {
        Self {
            fields: vec![
                ("Order ID", order.order_id.to_string()),
                ("Customer", order.customer_name.clone()),
                ("Pickup", order.pickup_address.clone()),
                ("Delivery", order.delivery_address.clone()),
                ("Status", order.status.to_string()),
                ("Payment Status", order.payment_status.to_string()),
                ("Tracking Info", order.tracking_info.clone().unwrap_or_default()),
            ],
        }
    }
}

impl Display for OrderDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, value) in &self.fields {
            writeln!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}
