use crate::lifecycle::AdminConfig;
use crate::service::{HttpOrderAdminService, OrderAdminService, ServiceError};
use crate::view::OrderAdminView;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime wiring for the console.
///
/// `AdminSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the order cache actor
/// - **Dependency Wiring**: handing the cache client and the backend service
///   to the [`OrderAdminView`]
///
/// # Example
///
/// ```ignore
/// let mut system = AdminSystem::new(&AdminConfig::from_env()?)?;
/// system.view.activate().await;
/// let summary = system.view.summary().await?;
/// system.shutdown().await?;
/// ```
pub struct AdminSystem {
    /// The operator console.
    pub view: OrderAdminView,

    /// Task handle for the order cache actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl AdminSystem {
    /// Starts a console talking HTTP to the backend named in `config`.
    pub fn new(config: &AdminConfig) -> Result<Self, ServiceError> {
        let service = HttpOrderAdminService::new(config)?;
        info!(base_url = %service.base_url(), "Using order-admin backend");
        Ok(Self::with_service(Arc::new(service)))
    }

    /// Starts a console over any [`OrderAdminService`] implementation.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_service(service: Arc<dyn OrderAdminService>) -> Self {
        let (cache_actor, cache_client) = crate::order_cache::new();
        let handle = tokio::spawn(cache_actor.run());

        Self {
            view: OrderAdminView::new(cache_client, service),
            handle,
        }
    }

    /// Gracefully shuts down the console.
    ///
    /// Dropping the view closes the cache channel; the actor then leaves its
    /// loop and this waits for the task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down console...");
        drop(self.view);

        if let Err(e) = self.handle.await {
            error!("Cache task failed: {:?}", e);
            return Err(format!("Cache task failed: {:?}", e));
        }

        info!("Console shutdown complete.");
        Ok(())
    }
}
