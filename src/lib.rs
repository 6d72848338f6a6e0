//! # Order Admin Console
//!
//! Operator console for an order-delivery backend: list orders, change an
//! order's delivery and payment status, and inspect a single order.
//!
//! The backend is the system of record. The console keeps a local copy of its
//! order list and only changes that copy after the backend has accepted a
//! change.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! A generic cache actor for records owned by a remote service.
//! - **Key items**: [`CachedEntity`](framework::CachedEntity), [`CacheActor`](framework::CacheActor), [`CacheClient`](framework::CacheClient).
//!
//! ### 2. The Data ([`model`], [`order_cache`])
//! [`Order`](model::Order) and its status enums as they appear on the wire,
//! the derived [`DashboardSummary`](model::DashboardSummary), and the
//! `CachedEntity` impl that lets orders live in the cache.
//!
//! ### 3. The Backend ([`service`])
//! The [`OrderAdminService`](service::OrderAdminService) seam, its HTTP
//! implementation, and a scripted mock for tests.
//!
//! ### 4. The Console ([`view`])
//! [`OrderAdminView`](view::OrderAdminView): load, change status, change
//! payment status, open and close the detail view.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Configuration, wiring and shutdown.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! ORDER_ADMIN_BASE_URL=http://localhost:5003 RUST_LOG=info cargo run
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_cache;
pub mod service;
pub mod view;
