//! # CachedEntity Trait
//!
//! The contract a record must satisfy to live in a [`CacheActor`](crate::framework::CacheActor).
//!
//! The cache mirrors state owned by a remote service. It never creates or
//! deletes records on its own: the whole collection is replaced by a fetch,
//! and individual records are patched once the remote side has accepted the
//! change. The trait therefore only needs a stable identity and a way to
//! apply a patch.

use std::fmt::{Debug, Display};

/// A record mirrored from a remote system of record.
pub trait CachedEntity: Clone + Send + Sync + 'static {
    /// Primary key, as assigned by the remote system.
    type Id: PartialEq + Clone + Send + Sync + Display + Debug;

    /// A patch to the mutable fields of the record.
    type Update: Clone + Send + Sync + Debug;

    /// The record's primary key.
    fn id(&self) -> &Self::Id;

    /// Apply an already-acknowledged patch in place.
    ///
    /// Fields not named by the patch must be left untouched.
    fn on_update(&mut self, update: Self::Update);
}
