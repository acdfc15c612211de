use anyhow::{Error, Result};
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::{clients::rbmq::RabbitMqClient, forwarder::Forwarder};

/// Consumes the notification queue one delivery at a time and routes payloads
/// to the forwarder.
///
/// Every delivery is acknowledged whether or not forwarding succeeded: a
/// failed forward is an observability event, not a retry trigger, so the
/// broker never sees a failure to redeliver.
pub struct QueueListener {
    client: RabbitMqClient,
    forwarder: Forwarder,
}

impl QueueListener {
    pub fn new(client: RabbitMqClient, forwarder: Forwarder) -> Self {
        Self { client, forwarder }
    }

    pub async fn run(&self) -> Result<(), Error> {
        let mut consumer = self.client.create_consumer().await?;

        info!("Listening for notification messages");

        while let Some(delivery) = consumer.next().await {
            let delivery = match delivery {
                Ok(delivery) => delivery,
                Err(e) => {
                    warn!(error = %e, "Failed to receive a delivery from the queue");
                    continue;
                }
            };

            handle_delivery(&self.forwarder, &delivery.data).await;

            self.client.acknowledge(delivery.delivery_tag).await?;
        }

        Ok(())
    }
}

/// Handles one delivery without any broker coupling, so the boundary behavior
/// can be exercised in tests directly.
///
/// Non-text (invalid UTF-8) deliveries are dropped with a warning. Forwarding
/// errors are logged and swallowed here — nothing escapes this function.
pub async fn handle_delivery(forwarder: &Forwarder, data: &[u8]) {
    let payload = match std::str::from_utf8(data) {
        Ok(payload) => payload,
        Err(_) => {
            warn!("Received a non-text message, dropping it");
            return;
        }
    };

    if let Err(e) = forwarder.forward(payload).await {
        warn!(
            kind = e.kind(),
            error = %e,
            "An error occurred processing a message from the queue"
        );
        debug!(error = ?e, "Full error detail");
    }
}
