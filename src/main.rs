//! # Order Admin Console
//!
//! Loads the order list from the configured backend and logs the dashboard
//! counters and one line per order.

use order_admin::lifecycle::{setup_tracing, AdminConfig, AdminSystem};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AdminConfig::from_env().map_err(|e| e.to_string())?;
    let system = AdminSystem::new(&config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("activation");
    system.view.activate().instrument(span).await;

    let summary = system.view.summary().await.map_err(|e| e.to_string())?;
    info!(
        total_orders = summary.total_orders,
        total_couriers = summary.total_couriers,
        pending_payments = summary.pending_payments,
        "Dashboard"
    );

    for order in system.view.orders().await.map_err(|e| e.to_string())? {
        info!(
            order_id = %order.order_id,
            customer = %order.customer_name,
            pickup = %order.pickup_address,
            delivery = %order.delivery_address,
            status = order.status.label(),
            payment = order.payment_status.label(),
            "Order"
        );
    }

    system.shutdown().await?;
    Ok(())
}
