//! # Console Lifecycle
//!
//! Configuration, startup wiring and shutdown for the console.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`AdminConfig`] names the backend; nothing is global
//! 2. **Actor Creation** - spawn the order cache actor
//! 3. **Dependency Injection** - hand the cache client and backend service to the view
//! 4. **Graceful Shutdown** - drop the view, then await the actor task
//! 5. **Observability Setup** - [`setup_tracing`]
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the view** - closes the sender side of the cache channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs its final size** and returns
//! 4. **Await completion** - a panicked actor is reported as an error

pub mod admin_system;
pub mod config;
pub mod tracing;

pub use admin_system::*;
pub use config::*;
pub use tracing::*;
