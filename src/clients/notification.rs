use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, info};

use crate::{
    config::Config,
    error::RelayError,
    models::message::{LoyaltyChange, NotificationResult},
};

/// Delivers a payload to the downstream notification service under a bearer
/// token. The raw-REST and typed-client variants are interchangeable behind
/// this trait.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(
        &self,
        bearer_token: &str,
        payload: &str,
    ) -> Result<NotificationResult, RelayError>;
}

/// Forwards the inbound JSON body unchanged to the notification endpoint.
pub struct RestNotificationSender {
    http_client: Client,
    url: String,
}

impl RestNotificationSender {
    pub fn new(config: &Config) -> Self {
        info!(url = %config.notification_service_url, "REST notification sender initialized");

        Self {
            http_client: Client::new(),
            url: config.notification_service_url.clone(),
        }
    }
}

#[async_trait]
impl NotificationSender for RestNotificationSender {
    async fn send(
        &self,
        bearer_token: &str,
        payload: &str,
    ) -> Result<NotificationResult, RelayError> {
        debug!(url = %self.url, "Forwarding raw payload to the notification service");

        let response = self
            .http_client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(bearer_token)
            .body(payload.to_owned())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RelayError::Status { status, body });
        }

        let result = serde_json::from_str(&body)?;
        Ok(result)
    }
}

/// Deserializes the inbound payload into a [`LoyaltyChange`] and sends it as a
/// structured JSON body.
pub struct TypedNotificationSender {
    http_client: Client,
    url: String,
}

impl TypedNotificationSender {
    pub fn new(config: &Config) -> Self {
        info!(url = %config.notification_service_url, "Typed notification sender initialized");

        Self {
            http_client: Client::new(),
            url: config.notification_service_url.clone(),
        }
    }
}

#[async_trait]
impl NotificationSender for TypedNotificationSender {
    async fn send(
        &self,
        bearer_token: &str,
        payload: &str,
    ) -> Result<NotificationResult, RelayError> {
        let loyalty_change: LoyaltyChange = serde_json::from_str(payload)?;

        debug!(
            url = %self.url,
            owner = ?loyalty_change.owner,
            id = ?loyalty_change.id,
            "Forwarding loyalty change to the notification service"
        );

        let response = self
            .http_client
            .post(&self.url)
            .bearer_auth(bearer_token)
            .json(&loyalty_change)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RelayError::Status { status, body });
        }

        let result = serde_json::from_str(&body)?;
        Ok(result)
    }
}
