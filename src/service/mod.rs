//! The remote order-admin service and its implementations.
//!
//! [`OrderAdminService`] is the seam between the console and the backend:
//! [`HttpOrderAdminService`] talks to the real REST API, and
//! [`MockOrderService`](mock::MockOrderService) replays scripted responses in
//! tests.

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::*;

use crate::model::{DeliveryStatus, Order, OrderId, PaymentStatus};
use async_trait::async_trait;

/// Operations the order-admin backend exposes to the console.
///
/// Every method either succeeds with the backend's acknowledgement or fails
/// with a [`ServiceError`]; none of them touch local state.
#[async_trait]
pub trait OrderAdminService: Send + Sync {
    /// `GET /admin/orders`: the full order collection.
    async fn list_orders(&self) -> Result<Vec<Order>, ServiceError>;

    /// `PUT /admin/update-order-status/{id}` with `{"status": ...}`.
    async fn update_order_status(
        &self,
        id: &OrderId,
        status: &DeliveryStatus,
    ) -> Result<(), ServiceError>;

    /// `PUT /admin/update-payment-status/{id}` with `{"payment_status": ...}`.
    async fn update_payment_status(
        &self,
        id: &OrderId,
        payment_status: &PaymentStatus,
    ) -> Result<(), ServiceError>;
}
