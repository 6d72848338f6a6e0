use order_admin::lifecycle::AdminSystem;
use order_admin::model::{DashboardSummary, DeliveryStatus, Order, OrderId, PaymentStatus};
use order_admin::service::mock::{MockOrderService, RecordedCall};
use order_admin::service::ServiceError;
use order_admin::view::AdminError;
use std::time::Duration;

fn backend_orders() -> Vec<Order> {
    vec![
        Order::new(1u64, "Ada", "1 Depot Rd", "9 Elm St").with_tracking_info("TRK-1"),
        Order::new(2u64, "Bo", "1 Depot Rd", "4 Oak Ave")
            .with_status(DeliveryStatus::Delivered)
            .with_payment_status(PaymentStatus::Completed),
    ]
}

fn id(n: u64) -> OrderId {
    OrderId::from(n)
}

/// Walks the dashboard scenario end to end against a scripted backend.
#[tokio::test]
async fn test_dashboard_scenario() {
    let mock = MockOrderService::new();
    mock.expect_list().return_ok(backend_orders());
    mock.expect_update_status(1u64).return_ok();
    mock.expect_update_payment_status(1u64).return_ok();

    let system = AdminSystem::with_service(mock.service());
    system.view.activate().await;

    let summary = system.view.summary().await.unwrap();
    assert_eq!(summary.total_orders, 2);
    assert_eq!(summary.total_couriers, 2);
    assert_eq!(summary.pending_payments, 1);

    // Delivery status change leaves the payment counter alone
    let updated = system
        .view
        .change_delivery_status(id(1), DeliveryStatus::InTransit)
        .await
        .expect("status change should succeed");
    assert_eq!(updated.status, DeliveryStatus::InTransit);

    let orders = system.view.orders().await.unwrap();
    assert_eq!(orders[0].status, DeliveryStatus::InTransit);
    assert_eq!(orders[1], backend_orders()[1]);
    assert_eq!(system.view.summary().await.unwrap().pending_payments, 1);

    // Paying the last pending order clears the counter
    system
        .view
        .change_payment_status(id(1), PaymentStatus::Completed)
        .await
        .expect("payment change should succeed");
    assert_eq!(system.view.summary().await.unwrap().pending_payments, 0);

    assert_eq!(
        mock.calls(),
        vec![
            RecordedCall::ListOrders,
            RecordedCall::UpdateOrderStatus(id(1), DeliveryStatus::InTransit),
            RecordedCall::UpdatePaymentStatus(id(1), PaymentStatus::Completed),
        ]
    );
    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_initial_load_is_silent() {
    let mock = MockOrderService::new();
    mock.expect_list()
        .return_err(ServiceError::Network("connection refused".into()));

    let system = AdminSystem::with_service(mock.service());
    system.view.activate().await;

    assert!(system.view.orders().await.unwrap().is_empty());
    assert_eq!(system.view.summary().await.unwrap(), DashboardSummary::default());

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_strict_load_reports_failure_and_keeps_stale_list() {
    let mock = MockOrderService::new();
    mock.expect_list().return_ok(backend_orders());
    mock.expect_list().return_err(ServiceError::Rejected {
        status: 503,
        body: "maintenance".into(),
    });

    let system = AdminSystem::with_service(mock.service());
    assert_eq!(system.view.load_orders().await, Ok(2));

    let result = system.view.load_orders().await;
    assert!(matches!(
        result,
        Err(AdminError::Service(ServiceError::Rejected { status: 503, .. }))
    ));
    assert_eq!(system.view.orders().await.unwrap(), backend_orders());

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_status_change_leaves_state_unchanged() {
    let mock = MockOrderService::new();
    mock.expect_list().return_ok(backend_orders());
    mock.expect_update_status(2u64).return_err(ServiceError::Rejected {
        status: 500,
        body: "db down".into(),
    });
    mock.expect_update_payment_status(1u64)
        .return_err(ServiceError::Network("timed out".into()));

    let system = AdminSystem::with_service(mock.service());
    system.view.activate().await;

    let result = system
        .view
        .change_delivery_status(id(2), DeliveryStatus::Pending)
        .await;
    assert!(matches!(result, Err(AdminError::Service(ServiceError::Rejected { .. }))));

    let result = system
        .view
        .change_payment_status(id(1), PaymentStatus::Completed)
        .await;
    assert_eq!(
        result,
        Err(AdminError::Service(ServiceError::Network("timed out".into())))
    );

    assert_eq!(system.view.orders().await.unwrap(), backend_orders());
    assert_eq!(system.view.summary().await.unwrap().pending_payments, 1);

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_order_is_not_sent_to_backend() {
    let mock = MockOrderService::new();
    mock.expect_list().return_ok(backend_orders());

    let system = AdminSystem::with_service(mock.service());
    system.view.activate().await;

    let result = system
        .view
        .change_delivery_status(id(99), DeliveryStatus::Delivered)
        .await;
    assert_eq!(result, Err(AdminError::NotFound(id(99))));

    // Only the initial list call reached the backend
    assert_eq!(mock.calls(), vec![RecordedCall::ListOrders]);
    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unlisted_status_value_is_sent_verbatim() {
    let mock = MockOrderService::new();
    mock.expect_list().return_ok(backend_orders());
    mock.expect_update_status(1u64).return_ok();

    let system = AdminSystem::with_service(mock.service());
    system.view.activate().await;

    let returned = DeliveryStatus::from("returned to sender");
    let updated = system
        .view
        .change_delivery_status(id(1), returned.clone())
        .await
        .unwrap();
    assert_eq!(updated.status, returned);
    assert_eq!(
        mock.calls()[1],
        RecordedCall::UpdateOrderStatus(id(1), DeliveryStatus::Other("returned to sender".into()))
    );

    system.shutdown().await.unwrap();
}

/// Changes to different orders complete independently, whatever order the
/// backend answers in.
#[tokio::test]
async fn test_concurrent_changes_to_different_orders() {
    let mock = MockOrderService::new();
    mock.expect_list().return_ok(backend_orders());
    mock.expect_update_status(1u64)
        .after(Duration::from_millis(50))
        .return_ok();
    mock.expect_update_payment_status(2u64).return_ok();

    let system = AdminSystem::with_service(mock.service());
    system.view.activate().await;

    let (first, second) = tokio::join!(
        system
            .view
            .change_delivery_status(id(1), DeliveryStatus::Delivered),
        system
            .view
            .change_payment_status(id(2), PaymentStatus::Pending),
    );
    first.unwrap();
    second.unwrap();

    let orders = system.view.orders().await.unwrap();
    assert_eq!(orders[0].status, DeliveryStatus::Delivered);
    assert_eq!(orders[0].payment_status, PaymentStatus::Pending);
    assert_eq!(orders[1].status, DeliveryStatus::Delivered);
    assert_eq!(orders[1].payment_status, PaymentStatus::Pending);
    assert_eq!(system.view.summary().await.unwrap().pending_payments, 2);

    mock.verify();
    system.shutdown().await.unwrap();
}

/// Two changes to the same field race; the answer that lands last wins.
#[tokio::test]
async fn test_same_field_race_last_response_wins() {
    let mock = MockOrderService::new();
    mock.expect_list().return_ok(backend_orders());
    // Issued first, answered last
    mock.expect_update_status(1u64)
        .after(Duration::from_millis(80))
        .return_ok();
    mock.expect_update_status(1u64).return_ok();

    let system = AdminSystem::with_service(mock.service());
    system.view.activate().await;

    let slow = system
        .view
        .change_delivery_status(id(1), DeliveryStatus::Delivered);
    let fast = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        system
            .view
            .change_delivery_status(id(1), DeliveryStatus::InTransit)
            .await
    };
    let (slow, fast) = tokio::join!(slow, fast);
    slow.unwrap();
    fast.unwrap();

    let order = system.view.order(&id(1)).await.unwrap().unwrap();
    assert_eq!(order.status, DeliveryStatus::Delivered);

    mock.verify();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_detail_view_open_and_close() {
    let mock = MockOrderService::new();
    mock.expect_list().return_ok(backend_orders());

    let mut system = AdminSystem::with_service(mock.service());
    system.view.activate().await;
    assert!(!system.view.is_details_open());
    assert!(system.view.selected_order().is_none());

    for order in system.view.orders().await.unwrap() {
        system.view.view_details(order.clone());
        assert!(system.view.is_details_open());
        assert_eq!(system.view.selected_order(), Some(&order));

        system.view.close_details();
        assert!(!system.view.is_details_open());
        assert!(system.view.selected_order().is_none());
        assert!(system.view.details().is_none());
    }

    let first = system.view.orders().await.unwrap().remove(0);
    system.view.view_details(first);
    let details = system.view.details().unwrap();
    assert_eq!(details.get("Customer"), Some("Ada"));
    assert_eq!(details.get("Tracking Info"), Some("TRK-1"));

    // The detail view needs no backend call
    assert_eq!(mock.calls(), vec![RecordedCall::ListOrders]);
    system.shutdown().await.unwrap();
}
