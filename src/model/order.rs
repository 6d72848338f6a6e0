use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Backend-assigned order identifier.
///
/// The backend may key orders by a signed integer or by string; both are
/// accepted and kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Numeric(i64),
    Text(String),
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        match i64::try_from(id) {
            Ok(id) => Self::Numeric(id),
            Err(_) => Self::Text(id.to_string()),
        }
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderId::Numeric(id) => write!(f, "{}", id),
            OrderId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Where the parcel is in the delivery flow.
///
/// Values the backend sends outside the known set are kept in `Other` and
/// sent back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
    Other(String),
}

impl DeliveryStatus {
    /// Choices offered to the operator, in menu order.
    pub const OPTIONS: [DeliveryStatus; 3] = [
        DeliveryStatus::Pending,
        DeliveryStatus::InTransit,
        DeliveryStatus::Delivered,
    ];

    /// Wire value.
    pub fn as_str(&self) -> &str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::InTransit => "in transit",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Other(raw) => raw,
        }
    }

    /// Menu label.
    pub fn label(&self) -> &str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::InTransit => "In Transit",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for DeliveryStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "pending" => DeliveryStatus::Pending,
            "in transit" => DeliveryStatus::InTransit,
            "delivered" => DeliveryStatus::Delivered,
            other => DeliveryStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for DeliveryStatus {
    fn from(raw: String) -> Self {
        DeliveryStatus::from(raw.as_str())
    }
}

impl From<DeliveryStatus> for String {
    fn from(status: DeliveryStatus) -> Self {
        match status {
            DeliveryStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the customer has paid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Other(String),
}

impl PaymentStatus {
    /// Choices offered to the operator, in menu order.
    pub const OPTIONS: [PaymentStatus; 2] = [PaymentStatus::Pending, PaymentStatus::Completed];

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Other(raw) => raw,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PaymentStatus::Pending)
    }
}

impl From<&str> for PaymentStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "pending" => PaymentStatus::Pending,
            "completed" => PaymentStatus::Completed,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(raw: String) -> Self {
        PaymentStatus::from(raw.as_str())
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order as served by the order-admin backend.
///
/// # Cache
/// This struct implements [`CachedEntity`](crate::framework::CachedEntity)
/// (see [`crate::order_cache`]), so the console can keep a local copy of the
/// backend's order list in a [`CacheActor`](crate::framework::CacheActor).
///
/// Only [`status`](Order::status) and [`payment_status`](Order::payment_status)
/// ever change locally, through an [`OrderUpdate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub pickup_address: String,
    #[serde(default)]
    pub delivery_address: String,
    pub status: DeliveryStatus,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub tracking_info: Option<String>,
}

impl Order {
    /// Creates a new Order with both statuses pending and no tracking info.
    ///
    /// # Arguments
    /// * `order_id` - Backend identifier
    /// * `customer_name` - Customer display name
    /// * `pickup_address` - Where the courier collects the parcel
    /// * `delivery_address` - Where the parcel goes
    pub fn new(
        order_id: impl Into<OrderId>,
        customer_name: impl Into<String>,
        pickup_address: impl Into<String>,
        delivery_address: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_name: customer_name.into(),
            pickup_address: pickup_address.into(),
            delivery_address: delivery_address.into(),
            status: DeliveryStatus::Pending,
            payment_status: PaymentStatus::Pending,
            tracking_info: None,
        }
    }

    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    pub fn with_tracking_info(mut self, tracking_info: impl Into<String>) -> Self {
        self.tracking_info = Some(tracking_info.into());
        self
    }
}

/// A change to one of the operator-editable fields of an [`Order`].
#[derive(Debug, Clone, PartialEq)]
pub enum OrderUpdate {
    Status(DeliveryStatus),
    PaymentStatus(PaymentStatus),
}
