//! # Cache Messages
//!
//! Requests sent from a [`CacheClient`](crate::framework::CacheClient) to the
//! [`CacheActor`](crate::framework::CacheActor) that owns the records.

use crate::framework::entity::CachedEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Operations supported by the cache.
///
/// Records only enter the cache through `Replace` (a full fetch from the
/// remote side) and only change through `Update` (a reconciled patch).
pub enum CacheRequest<T: CachedEntity> {
    /// Swap the whole collection for a freshly fetched one.
    Replace {
        items: Vec<T>,
        respond_to: Response<usize>,
    },
    /// Snapshot of every record, in fetch order.
    List { respond_to: Response<Vec<T>> },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Patch the record(s) carrying `id`.
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}
