//! Error types for console operations.

use crate::framework::FrameworkError;
use crate::model::OrderId;
use crate::service::ServiceError;
use thiserror::Error;

/// Errors surfaced by [`OrderAdminView`](crate::view::OrderAdminView) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    /// The order is not in the local list.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The backend call failed; local state was left as it was.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The local order cache stopped answering.
    #[error("Order cache unavailable: {0}")]
    Cache(String),
}

impl AdminError {
    /// Maps a cache failure for `id`, keeping the typed id on `NotFound`.
    pub(crate) fn from_cache(id: &OrderId, e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(_) => AdminError::NotFound(id.clone()),
            other => AdminError::Cache(other.to_string()),
        }
    }
}

impl From<FrameworkError> for AdminError {
    fn from(e: FrameworkError) -> Self {
        AdminError::Cache(e.to_string())
    }
}
