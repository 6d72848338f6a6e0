//! # Framework Errors
//!
//! Errors raised by the cache actor plumbing itself, independent of the
//! entity being cached.

/// Errors that can occur while talking to a [`CacheActor`](crate::framework::CacheActor).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Cache actor closed")]
    ActorClosed,
    #[error("Cache actor dropped response channel")]
    ActorDropped,
    #[error("Item not cached: {0}")]
    NotFound(String),
}
