//! # Cache Client
//!
//! Cloneable handle to a [`CacheActor`](crate::framework::CacheActor).

use crate::framework::entity::CachedEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::CacheRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for reading and reconciling a cached collection.
///
/// Holds only the channel sender, so cloning is cheap. Every method sends one
/// request and waits for the actor's reply on a oneshot channel.
pub struct CacheClient<T: CachedEntity> {
    sender: mpsc::Sender<CacheRequest<T>>,
}

impl<T: CachedEntity> Clone for CacheClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: CachedEntity> CacheClient<T> {
    pub fn new(sender: mpsc::Sender<CacheRequest<T>>) -> Self {
        Self { sender }
    }

    /// Replace the cached collection, returning the new size.
    pub async fn replace(&self, items: Vec<T>) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CacheRequest::Replace { items, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CacheRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CacheRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Apply a patch the remote side has already accepted.
    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CacheRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
