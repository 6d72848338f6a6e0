//! # Order Admin View
//!
//! The operator console over the order-admin backend.
//!
//! The view owns two pieces of state:
//! - the **order list**, a cache of the backend's collection held by a
//!   [`CacheActor`](crate::framework::CacheActor) and reached through a
//!   [`CacheClient`];
//! - the **detail view**, a [`DetailModal`] that only the view itself touches.
//!
//! Status changes follow one rule: the backend is asked first, and the local
//! entry changes only after it has said yes. A rejected or failed call leaves
//! the list exactly as it was, so there is nothing to roll back.
//!
//! Status-change methods take `&self`, so several may be in flight at once.
//! Each reconciles only its own order. Two changes to the same field of the
//! same order race, and the last reconcile to reach the cache wins.

pub mod detail;
pub mod error;

pub use detail::*;
pub use error::*;

use crate::framework::CacheClient;
use crate::model::{
    DashboardSummary, DeliveryStatus, Order, OrderDetails, OrderId, OrderUpdate, PaymentStatus,
};
use crate::service::OrderAdminService;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub struct OrderAdminView {
    orders: CacheClient<Order>,
    service: Arc<dyn OrderAdminService>,
    modal: DetailModal,
}

impl OrderAdminView {
    /// Creates a view over an (empty) order cache and a backend service.
    pub fn new(orders: CacheClient<Order>, service: Arc<dyn OrderAdminService>) -> Self {
        Self {
            orders,
            service,
            modal: DetailModal::Closed,
        }
    }

    /// Loads the order list when the console is opened.
    ///
    /// Failures are logged and swallowed: the list stays empty (or stale) and
    /// the caller sees nothing. Use [`load_orders`](Self::load_orders) to get
    /// the outcome.
    #[instrument(skip(self))]
    pub async fn activate(&self) {
        if let Err(e) = self.load_orders().await {
            error!(error = %e, "Error fetching orders");
        }
    }

    /// Fetches the full order list and replaces the local copy with it.
    ///
    /// Returns the number of orders now held. On failure the local copy is
    /// unchanged.
    #[instrument(skip(self))]
    pub async fn load_orders(&self) -> Result<usize, AdminError> {
        debug!("Fetching orders");
        let orders = self.service.list_orders().await?;
        let count = self.orders.replace(orders).await?;
        info!(count, "Orders loaded");
        Ok(count)
    }

    /// Sets an order's delivery status, then mirrors it locally.
    ///
    /// # Errors
    /// - [`AdminError::NotFound`] if the order is not in the local list (the
    ///   backend is not contacted).
    /// - [`AdminError::Service`] if the backend call fails; local state is
    ///   untouched.
    #[instrument(skip_all, fields(order_id = %order_id, status = %status))]
    pub async fn change_delivery_status(
        &self,
        order_id: OrderId,
        status: DeliveryStatus,
    ) -> Result<Order, AdminError> {
        self.ensure_cached(&order_id).await?;

        if let Err(e) = self.service.update_order_status(&order_id, &status).await {
            warn!(error = %e, "Error updating order status");
            return Err(e.into());
        }

        self.reconcile(order_id, OrderUpdate::Status(status)).await
    }

    /// Sets an order's payment status, then mirrors it locally.
    ///
    /// Same contract as [`change_delivery_status`](Self::change_delivery_status).
    #[instrument(skip_all, fields(order_id = %order_id, payment_status = %payment_status))]
    pub async fn change_payment_status(
        &self,
        order_id: OrderId,
        payment_status: PaymentStatus,
    ) -> Result<Order, AdminError> {
        self.ensure_cached(&order_id).await?;

        if let Err(e) = self
            .service
            .update_payment_status(&order_id, &payment_status)
            .await
        {
            warn!(error = %e, "Error updating payment status");
            return Err(e.into());
        }

        self.reconcile(order_id, OrderUpdate::PaymentStatus(payment_status))
            .await
    }

    /// Opens the detail view on `order`.
    pub fn view_details(&mut self, order: Order) {
        debug!(order_id = %order.order_id, "Opening details");
        self.modal.open(order);
    }

    /// Closes the detail view and clears the selection.
    pub fn close_details(&mut self) {
        self.modal.close();
    }

    pub fn is_details_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn selected_order(&self) -> Option<&Order> {
        self.modal.selected()
    }

    /// Label/value listing of the selected order, if the detail view is open.
    pub fn details(&self) -> Option<OrderDetails> {
        self.modal.selected().map(OrderDetails::from)
    }

    /// Snapshot of the order list, in backend order.
    pub async fn orders(&self) -> Result<Vec<Order>, AdminError> {
        Ok(self.orders.list().await?)
    }

    pub async fn order(&self, order_id: &OrderId) -> Result<Option<Order>, AdminError> {
        Ok(self.orders.get(order_id.clone()).await?)
    }

    /// Headline counters, recomputed from the current list.
    pub async fn summary(&self) -> Result<DashboardSummary, AdminError> {
        let orders = self.orders.list().await?;
        Ok(DashboardSummary::from_orders(&orders))
    }

    async fn ensure_cached(&self, order_id: &OrderId) -> Result<(), AdminError> {
        match self.orders.get(order_id.clone()).await? {
            Some(_) => Ok(()),
            None => {
                warn!("Order not in local list");
                Err(AdminError::NotFound(order_id.clone()))
            }
        }
    }

    async fn reconcile(&self, order_id: OrderId, update: OrderUpdate) -> Result<Order, AdminError> {
        let order = self
            .orders
            .update(order_id.clone(), update)
            .await
            .map_err(|e| AdminError::from_cache(&order_id, e))?;
        info!(
            status = %order.status,
            payment_status = %order.payment_status,
            "Order updated"
        );
        Ok(order)
    }
}
