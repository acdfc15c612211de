use std::sync::Arc;

use anyhow::{Error, Result};
use notification_relay::{
    clients::{
        notification::{NotificationSender, RestNotificationSender, TypedNotificationSender},
        rbmq::RabbitMqClient,
    },
    config::{Config, SenderMode},
    forwarder::Forwarder,
    listener::QueueListener,
    token::JwtIssuer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let rabbitmq = RabbitMqClient::connect(&config).await?;

    let sender: Arc<dyn NotificationSender> = match config.sender_mode {
        SenderMode::Rest => Arc::new(RestNotificationSender::new(&config)),
        SenderMode::Typed => Arc::new(TypedNotificationSender::new(&config)),
    };

    let forwarder = Forwarder::new(Arc::new(JwtIssuer::new(&config)), sender);
    let listener = QueueListener::new(rabbitmq, forwarder);

    tokio::select! {
        result = listener.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, stopping listener");
            Ok(())
        }
    }
}
