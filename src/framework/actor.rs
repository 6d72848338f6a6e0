//! # Cache Actor
//!
//! The `CacheActor` owns the local copy of a remote collection and processes
//! requests one at a time, so the collection needs no lock.

use crate::framework::client::CacheClient;
use crate::framework::entity::CachedEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::CacheRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a cached collection of `T`.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `CacheActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client wherever the cache is read or reconciled.
///
/// The actor stops once every client has been dropped.
///
/// # Implementation Details
///
/// Records are kept in a `Vec` so the order delivered by the remote side is
/// the order handed back by `List`.
///
/// * **Replace**: drops the current contents and stores the new batch as-is.
/// * **List**: clones the whole collection.
/// * **Get**: clones the first record whose id matches, if any.
/// * **Update**: applies the patch to every record whose id matches and
///   returns the first one, or `NotFound` if none matched.
pub struct CacheActor<T: CachedEntity> {
    receiver: mpsc::Receiver<CacheRequest<T>>,
    store: Vec<T>,
}

impl<T: CachedEntity> CacheActor<T> {
    /// Creates a new `CacheActor` (initially empty) and its `CacheClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; clients wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, CacheClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
        };
        (actor, CacheClient::new(sender))
    }

    /// Runs the event loop until the channel closes.
    pub async fn run(mut self) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Cache started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CacheRequest::Replace { items, respond_to } => {
                    let previous = self.store.len();
                    self.store = items;
                    info!(entity_type, previous, size = self.store.len(), "Replaced");
                    let _ = respond_to.send(Ok(self.store.len()));
                }
                CacheRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                CacheRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|item| item.id() == &id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                CacheRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let mut updated = None;
                    for item in self.store.iter_mut().filter(|item| item.id() == &id) {
                        item.on_update(update.clone());
                        if updated.is_none() {
                            updated = Some(item.clone());
                        }
                    }
                    match updated {
                        Some(item) => {
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(item));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
