//! # Mock Service & Testing Guide
//!
//! `MockOrderService` implements [`OrderAdminService`] entirely in memory.
//! Tests script the backend's answers up front, run the console against it,
//! and then check that every scripted call happened.
//!
//! ## When to use the mock vs the HTTP service
//!
//! | Feature | MockOrderService | HttpOrderAdminService |
//! |---------|------------------|-----------------------|
//! | **Speed** | Instant | Needs a listening server |
//! | **Determinism** | Scripted order of answers | Subject to the network |
//! | **Error Injection** | Easy (`return_err`) | Needs a misbehaving server |
//! | **Use Case** | View and reconciliation logic | Wire format, status codes |
//!
//! ## Example
//!
//! ```rust
//! use order_admin::model::{DeliveryStatus, Order};
//! use order_admin::service::mock::MockOrderService;
//! use order_admin::service::{OrderAdminService, ServiceError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockOrderService::new();
//!     mock.expect_list().return_ok(vec![Order::new(1u64, "Ada", "Depot", "Elm St")]);
//!     mock.expect_update_status(1u64)
//!         .return_err(ServiceError::Network("connection refused".into()));
//!
//!     let service = mock.service();
//!     assert_eq!(service.list_orders().await.unwrap().len(), 1);
//!     assert!(service
//!         .update_order_status(&1u64.into(), &DeliveryStatus::Delivered)
//!         .await
//!         .is_err());
//!
//!     mock.verify();
//! }
//! ```
//!
//! Each call takes the earliest scripted answer for the same operation and
//! order id, so concurrent calls for different orders may arrive in any
//! order. A call with no matching answer panics, which fails the test.

use crate::model::{DeliveryStatus, Order, OrderId, PaymentStatus};
use crate::service::{OrderAdminService, ServiceError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation {
    List {
        response: Result<Vec<Order>, ServiceError>,
        delay: Option<Duration>,
    },
    UpdateStatus {
        id: OrderId,
        response: Result<(), ServiceError>,
        delay: Option<Duration>,
    },
    UpdatePaymentStatus {
        id: OrderId,
        response: Result<(), ServiceError>,
        delay: Option<Duration>,
    },
}

impl Expectation {
    fn matches(&self, call: &RecordedCall) -> bool {
        match (self, call) {
            (Expectation::List { .. }, RecordedCall::ListOrders) => true,
            (Expectation::UpdateStatus { id, .. }, RecordedCall::UpdateOrderStatus(called, _)) => {
                id == called
            }
            (
                Expectation::UpdatePaymentStatus { id, .. },
                RecordedCall::UpdatePaymentStatus(called, _),
            ) => id == called,
            _ => false,
        }
    }
}

/// A call the mock received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    ListOrders,
    UpdateOrderStatus(OrderId, DeliveryStatus),
    UpdatePaymentStatus(OrderId, PaymentStatus),
}

/// A scripted stand-in for the order-admin backend.
///
/// Clones share the same script and call log.
#[derive(Clone, Default)]
pub struct MockOrderService {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockOrderService {
    pub fn new() -> Self {
        Self::default()
    }

    /// This mock as a shareable service handle.
    pub fn service(&self) -> Arc<dyn OrderAdminService> {
        Arc::new(self.clone())
    }

    /// Expects a `list_orders` call.
    pub fn expect_list(&self) -> ListExpectationBuilder {
        ListExpectationBuilder {
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update_order_status` call for `id`.
    pub fn expect_update_status(&self, id: impl Into<OrderId>) -> UpdateExpectationBuilder {
        UpdateExpectationBuilder {
            id: id.into(),
            field: UpdateField::Status,
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update_payment_status` call for `id`.
    pub fn expect_update_payment_status(&self, id: impl Into<OrderId>) -> UpdateExpectationBuilder {
        UpdateExpectationBuilder {
            id: id.into(),
            field: UpdateField::PaymentStatus,
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    /// Logs `call` and takes the earliest scripted answer for it.
    fn next(&self, call: RecordedCall) -> Expectation {
        self.calls.lock().unwrap().push(call.clone());
        let mut exps = self.expectations.lock().unwrap();
        match exps.iter().position(|exp| exp.matches(&call)) {
            Some(index) => exps.remove(index).unwrap(),
            None => panic!("Unexpected call or expectation mismatch: {:?}", call),
        }
    }
}

async fn pause(delay: Option<Duration>) {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl OrderAdminService for MockOrderService {
    async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        match self.next(RecordedCall::ListOrders) {
            Expectation::List { response, delay } => {
                pause(delay).await;
                response
            }
            _ => panic!("Unexpected list_orders call or expectation mismatch"),
        }
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: &DeliveryStatus,
    ) -> Result<(), ServiceError> {
        let call = RecordedCall::UpdateOrderStatus(id.clone(), status.clone());
        match self.next(call) {
            Expectation::UpdateStatus { response, delay, .. } => {
                pause(delay).await;
                response
            }
            _ => panic!("Unexpected update_order_status call or expectation mismatch"),
        }
    }

    async fn update_payment_status(
        &self,
        id: &OrderId,
        payment_status: &PaymentStatus,
    ) -> Result<(), ServiceError> {
        let call = RecordedCall::UpdatePaymentStatus(id.clone(), payment_status.clone());
        match self.next(call) {
            Expectation::UpdatePaymentStatus { response, delay, .. } => {
                pause(delay).await;
                response
            }
            _ => panic!("Unexpected update_payment_status call or expectation mismatch"),
        }
    }
}

/// Builder for `list_orders` expectations.
pub struct ListExpectationBuilder {
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ListExpectationBuilder {
    /// Hold the answer back for `delay`.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, orders: Vec<Order>) {
        self.push(Ok(orders));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ServiceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<Order>, ServiceError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response,
            delay: self.delay,
        });
    }
}

enum UpdateField {
    Status,
    PaymentStatus,
}

/// Builder for status and payment-status update expectations.
pub struct UpdateExpectationBuilder {
    id: OrderId,
    field: UpdateField,
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl UpdateExpectationBuilder {
    /// Hold the answer back for `delay`.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ServiceError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), ServiceError>) {
        let expectation = match self.field {
            UpdateField::Status => Expectation::UpdateStatus {
                id: self.id,
                response,
                delay: self.delay,
            },
            UpdateField::PaymentStatus => Expectation::UpdatePaymentStatus {
                id: self.id,
                response,
                delay: self.delay,
            },
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_script_and_records_calls() {
        let mock = MockOrderService::new();
        mock.expect_list().return_ok(vec![Order::new(1u64, "Ada", "a", "b")]);
        mock.expect_update_payment_status(1u64).return_ok();

        let service = mock.service();
        let orders = service.list_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        service
            .update_payment_status(&OrderId::from(1u64), &PaymentStatus::Completed)
            .await
            .unwrap();

        assert_eq!(
            mock.calls(),
            vec![
                RecordedCall::ListOrders,
                RecordedCall::UpdatePaymentStatus(OrderId::from(1u64), PaymentStatus::Completed),
            ]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn scripted_errors_are_returned() {
        let mock = MockOrderService::new();
        mock.expect_update_status("x").return_err(ServiceError::Rejected {
            status: 500,
            body: "boom".into(),
        });

        let result = mock
            .update_order_status(&OrderId::from("x"), &DeliveryStatus::Delivered)
            .await;
        assert_eq!(
            result,
            Err(ServiceError::Rejected {
                status: 500,
                body: "boom".into()
            })
        );
    }

    #[tokio::test]
    async fn answers_match_by_order_id() {
        let mock = MockOrderService::new();
        mock.expect_update_status(1u64).return_ok();
        mock.expect_update_status(2u64)
            .return_err(ServiceError::Network("reset".into()));

        let second = mock
            .update_order_status(&OrderId::from(2u64), &DeliveryStatus::Delivered)
            .await;
        let first = mock
            .update_order_status(&OrderId::from(1u64), &DeliveryStatus::Delivered)
            .await;

        assert!(second.is_err());
        assert!(first.is_ok());
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected call or expectation mismatch")]
    async fn unscripted_call_panics() {
        let mock = MockOrderService::new();
        mock.expect_update_status(1u64).return_ok();
        let _ = mock
            .update_payment_status(&OrderId::from(1u64), &PaymentStatus::Completed)
            .await;
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn verify_fails_on_leftover_expectations() {
        let mock = MockOrderService::new();
        mock.expect_list().return_ok(vec![]);
        mock.verify();
    }
}
