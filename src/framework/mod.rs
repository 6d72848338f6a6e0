//! Generic cache actor for records owned by a remote service.
//!
//! # Main Components
//!
//! - [`CachedEntity`] - Trait that cached record types implement
//! - [`CacheActor`] - Actor that owns the cached collection
//! - [`CacheClient`] - Cloneable handle used to read and reconcile the cache
//! - [`FrameworkError`] - Errors from the actor plumbing

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;

// Re-export core types for convenience
pub use actor::CacheActor;
pub use client::CacheClient;
pub use entity::CachedEntity;
pub use error::FrameworkError;
pub use message::{CacheRequest, Response};
