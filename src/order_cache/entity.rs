//! [`CachedEntity`] implementation for [`Order`].
//!
//! Lets the backend's order list live in a [`crate::framework::CacheActor`].

use crate::framework::CachedEntity;
use crate::model::{Order, OrderId, OrderUpdate};

impl CachedEntity for Order {
    type Id = OrderId;
    type Update = OrderUpdate;

    fn id(&self) -> &OrderId {
        &self.order_id
    }

    /// Applies an acknowledged status change.
    ///
    /// # Fields Updated
    /// - `status` for [`OrderUpdate::Status`]
    /// - `payment_status` for [`OrderUpdate::PaymentStatus`]
    fn on_update(&mut self, update: OrderUpdate) {
        match update {
            OrderUpdate::Status(status) => self.status = status,
            OrderUpdate::PaymentStatus(payment_status) => self.payment_status = payment_status,
        }
    }
}
