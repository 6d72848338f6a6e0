//! # HTTP Service
//!
//! [`OrderAdminService`] over the backend's REST API, using `reqwest`.

use crate::lifecycle::AdminConfig;
use crate::model::{DeliveryStatus, Order, OrderId, PaymentStatus};
use crate::service::{OrderAdminService, ServiceError};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument, warn};

#[derive(Serialize)]
struct StatusBody<'a> {
    status: &'a DeliveryStatus,
}

#[derive(Serialize)]
struct PaymentStatusBody<'a> {
    payment_status: &'a PaymentStatus,
}

/// Client for the order-admin REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpOrderAdminService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderAdminService {
    /// Builds a client for the service at `config.base_url`.
    pub fn new(config: &AdminConfig) -> Result<Self, ServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %body, "Request rejected");
        Err(ServiceError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    async fn put_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ServiceError> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let response = self.client.put(&url).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl OrderAdminService for HttpOrderAdminService {
    #[instrument(skip(self))]
    async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
        let url = self.url("/admin/orders");
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        let response = Self::check(response).await?;
        let orders: Vec<Order> = response.json().await?;
        debug!(count = orders.len(), "Orders received");
        Ok(orders)
    }

    #[instrument(skip_all, fields(order_id = %id, status = %status))]
    async fn update_order_status(
        &self,
        id: &OrderId,
        status: &DeliveryStatus,
    ) -> Result<(), ServiceError> {
        self.put_json(
            &format!("/admin/update-order-status/{}", id),
            &StatusBody { status },
        )
        .await
    }

    #[instrument(skip_all, fields(order_id = %id, payment_status = %payment_status))]
    async fn update_payment_status(
        &self,
        id: &OrderId,
        payment_status: &PaymentStatus,
    ) -> Result<(), ServiceError> {
        self.put_json(
            &format!("/admin/update-payment-status/{}", id),
            &PaymentStatusBody { payment_status },
        )
        .await
    }
}
