//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven
//! by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Cache lifecycle**: start, replace, update, shutdown (with sizes)
//! - **Backend calls**: one span per request carrying `order_id` and the
//!   requested value
//! - **Failures**: rejected updates at `warn`, failed list loads at `error`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Request URLs and cache traffic
//! RUST_LOG=debug cargo run
//!
//! # Only the HTTP client
//! RUST_LOG=order_admin::service=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Using order-admin backend base_url=http://localhost:5003
//! INFO Cache started entity_type="Order"
//! INFO activate:load_orders: Replaced entity_type="Order" previous=0 size=2
//! INFO activate:load_orders: Orders loaded count=2
//! INFO change_delivery_status{order_id=1 status=in transit}: Updated entity_type="Order" id=1
//! INFO change_delivery_status{order_id=1 status=in transit}: Order updated status=in transit payment_status=pending
//! ```
//!
//! A rejected update never reaches the cache:
//!
//! ```text
//! WARN change_payment_status{order_id=2 payment_status=completed}:update_payment_status{...}: Request rejected status=500 body=...
//! WARN change_payment_status{order_id=2 payment_status=completed}: Error updating payment status error=Rejected by server with status 500: ...
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and span names carry the context
        .compact()
        .init();
}
